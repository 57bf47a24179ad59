use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    CreateItemError, CreateItemUseCase,
};
use crate::modules::item::application::ports::outgoing::{
    CreateItemData, ItemRepository, ItemResult,
};
use crate::shared::validation::parse_name;

pub struct CreateItemService<B, R>
where
    B: BucketlistQuery,
    R: ItemRepository,
{
    bucketlists: B,
    repository: R,
}

impl<B, R> CreateItemService<B, R>
where
    B: BucketlistQuery,
    R: ItemRepository,
{
    pub fn new(bucketlists: B, repository: R) -> Self {
        Self {
            bucketlists,
            repository,
        }
    }
}

#[async_trait]
impl<B, R> CreateItemUseCase for CreateItemService<B, R>
where
    B: BucketlistQuery + Send + Sync,
    R: ItemRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        name: &str,
    ) -> Result<ItemResult, CreateItemError> {
        self.bucketlists
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => CreateItemError::BucketlistNotFound,
                BucketlistQueryError::DatabaseError(msg) => CreateItemError::RepositoryError(msg),
            })?;

        let name = parse_name(name).map_err(|e| CreateItemError::InvalidName(e.to_string()))?;

        self.repository
            .create(CreateItemData {
                bucketlist_id,
                name,
            })
            .await
            .map_err(|e| CreateItemError::RepositoryError(e.to_string()))
    }
}
