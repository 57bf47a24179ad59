use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    GetSingleBucketlistError, GetSingleBucketlistUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError, BucketlistResult,
};

pub struct GetSingleBucketlistService<Q>
where
    Q: BucketlistQuery,
{
    query: Q,
}

impl<Q> GetSingleBucketlistService<Q>
where
    Q: BucketlistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleBucketlistUseCase for GetSingleBucketlistService<Q>
where
    Q: BucketlistQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<BucketlistResult, GetSingleBucketlistError> {
        self.query
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => GetSingleBucketlistError::NotFound,
                BucketlistQueryError::DatabaseError(msg) => {
                    GetSingleBucketlistError::RepositoryError(msg)
                }
            })
    }
}
