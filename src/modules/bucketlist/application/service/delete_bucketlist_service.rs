use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    DeleteBucketlistError, DeleteBucketlistUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistRepository, BucketlistRepositoryError,
};

pub struct DeleteBucketlistService<R>
where
    R: BucketlistRepository,
{
    repository: R,
}

impl<R> DeleteBucketlistService<R>
where
    R: BucketlistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteBucketlistUseCase for DeleteBucketlistService<R>
where
    R: BucketlistRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<(), DeleteBucketlistError> {
        self.repository
            .delete(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistRepositoryError::NotFound => DeleteBucketlistError::NotFound,
                BucketlistRepositoryError::DatabaseError(msg) => {
                    DeleteBucketlistError::RepositoryError(msg)
                }
            })
    }
}
