use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    GetBucketlistsError, GetBucketlistsUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistResult,
};

pub struct GetBucketlistsService<Q>
where
    Q: BucketlistQuery,
{
    query: Q,
}

impl<Q> GetBucketlistsService<Q>
where
    Q: BucketlistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBucketlistsUseCase for GetBucketlistsService<Q>
where
    Q: BucketlistQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<BucketlistResult>, GetBucketlistsError> {
        self.query
            .find_all_by_owner(owner)
            .await
            .map_err(|e| GetBucketlistsError::RepositoryError(e.to_string()))
    }
}
