use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::item::application::ports::outgoing::{ItemResult, UpdateItemData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateItemError {
    #[error("Bucketlist not found")]
    BucketlistNotFound,

    #[error("Item not found")]
    NotFound,

    #[error("{0}")]
    InvalidName(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        item_id: i32,
        data: UpdateItemData,
    ) -> Result<ItemResult, UpdateItemError>;
}
