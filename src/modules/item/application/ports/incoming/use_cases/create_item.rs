use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::item::application::ports::outgoing::ItemResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateItemError {
    /// Parent bucketlist is missing or owned by someone else
    #[error("Bucketlist not found")]
    BucketlistNotFound,

    #[error("{0}")]
    InvalidName(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        name: &str,
    ) -> Result<ItemResult, CreateItemError>;
}
