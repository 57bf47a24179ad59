use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleBucketlistError {
    #[error("Bucketlist not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleBucketlistUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<BucketlistResult, GetSingleBucketlistError>;
}
