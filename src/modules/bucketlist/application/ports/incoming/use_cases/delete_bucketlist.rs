use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteBucketlistError {
    #[error("Bucketlist not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteBucketlistUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, bucketlist_id: i32)
        -> Result<(), DeleteBucketlistError>;
}
