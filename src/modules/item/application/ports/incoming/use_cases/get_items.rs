use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::item::application::ports::outgoing::ItemResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetItemsError {
    #[error("Bucketlist not found")]
    BucketlistNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<Vec<ItemResult>, GetItemsError>;
}
