use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistResult, UpdateBucketlistData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBucketlistError {
    #[error("{0}")]
    InvalidName(String),

    #[error("Bucketlist not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateBucketlistUseCase: Send + Sync {
    /// `data.name` arrives untrimmed from the request
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        data: UpdateBucketlistData,
    ) -> Result<BucketlistResult, UpdateBucketlistError>;
}
