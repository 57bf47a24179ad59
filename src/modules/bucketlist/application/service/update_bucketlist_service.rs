use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    UpdateBucketlistError, UpdateBucketlistUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistRepository, BucketlistRepositoryError, BucketlistResult, UpdateBucketlistData,
};
use crate::shared::validation::parse_name;

pub struct UpdateBucketlistService<R>
where
    R: BucketlistRepository,
{
    repository: R,
}

impl<R> UpdateBucketlistService<R>
where
    R: BucketlistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateBucketlistUseCase for UpdateBucketlistService<R>
where
    R: BucketlistRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        data: UpdateBucketlistData,
    ) -> Result<BucketlistResult, UpdateBucketlistError> {
        let name = data
            .name
            .as_deref()
            .map(parse_name)
            .transpose()
            .map_err(|e| UpdateBucketlistError::InvalidName(e.to_string()))?;

        self.repository
            .update(owner, bucketlist_id, UpdateBucketlistData { name })
            .await
            .map_err(|e| match e {
                BucketlistRepositoryError::NotFound => UpdateBucketlistError::NotFound,
                BucketlistRepositoryError::DatabaseError(msg) => {
                    UpdateBucketlistError::RepositoryError(msg)
                }
            })
    }
}
