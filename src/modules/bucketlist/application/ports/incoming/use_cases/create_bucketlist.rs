use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBucketlistError {
    #[error("{0}")]
    InvalidName(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBucketlistUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        name: &str,
    ) -> Result<BucketlistResult, CreateBucketlistError>;
}
