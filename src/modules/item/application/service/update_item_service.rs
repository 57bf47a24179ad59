use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    UpdateItemError, UpdateItemUseCase,
};
use crate::modules::item::application::ports::outgoing::{
    ItemRepository, ItemRepositoryError, ItemResult, UpdateItemData,
};
use crate::shared::validation::parse_name;

pub struct UpdateItemService<B, R>
where
    B: BucketlistQuery,
    R: ItemRepository,
{
    bucketlists: B,
    repository: R,
}

impl<B, R> UpdateItemService<B, R>
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
impl<B, R> UpdateItemUseCase for UpdateItemService<B, R>
where
    B: BucketlistQuery + Send + Sync,
    R: ItemRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        item_id: i32,
        data: UpdateItemData,
    ) -> Result<ItemResult, UpdateItemError> {
        self.bucketlists
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => UpdateItemError::BucketlistNotFound,
                BucketlistQueryError::DatabaseError(msg) => UpdateItemError::RepositoryError(msg),
            })?;

        let name = data
            .name
            .as_deref()
            .map(parse_name)
            .transpose()
            .map_err(|e| UpdateItemError::InvalidName(e.to_string()))?;

        self.repository
            .update(
                bucketlist_id,
                item_id,
                UpdateItemData {
                    name,
                    done: data.done,
                },
            )
            .await
            .map_err(|e| match e {
                ItemRepositoryError::NotFound => UpdateItemError::NotFound,
                ItemRepositoryError::DatabaseError(msg) => UpdateItemError::RepositoryError(msg),
            })
    }
}
