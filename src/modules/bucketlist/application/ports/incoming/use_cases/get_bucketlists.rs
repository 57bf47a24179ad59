use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBucketlistsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBucketlistsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<BucketlistResult>, GetBucketlistsError>;
}
