use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::item::application::ports::outgoing::ItemResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleItemError {
    #[error("Bucketlist not found")]
    BucketlistNotFound,

    #[error("Item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        item_id: i32,
    ) -> Result<ItemResult, GetSingleItemError>;
}
