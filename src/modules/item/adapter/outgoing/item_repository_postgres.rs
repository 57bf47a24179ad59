use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::item::adapter::outgoing::sea_orm_entity::items::{
    ActiveModel, Column, Entity,
};
use crate::modules::item::application::ports::outgoing::{
    CreateItemData, ItemRepository, ItemRepositoryError, ItemResult, UpdateItemData,
};

#[derive(Clone)]
pub struct ItemRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ItemRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn create(&self, data: CreateItemData) -> Result<ItemResult, ItemRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            bucketlist_id: Set(data.bucketlist_id),
            done: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update(
        &self,
        bucketlist_id: i32,
        item_id: i32,
        data: UpdateItemData,
    ) -> Result<ItemResult, ItemRepositoryError> {
        if data.is_empty() {
            return Entity::find_by_id(item_id)
                .filter(Column::BucketlistId.eq(bucketlist_id))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(ItemResult::from)
                .ok_or(ItemRepositoryError::NotFound);
        }

        let mut model = <ActiveModel as Default>::default();
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(done) = data.done {
            model.done = Set(done);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(item_id))
            .filter(Column::BucketlistId.eq(bucketlist_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(ItemResult::from)
            .ok_or(ItemRepositoryError::NotFound)
    }

    async fn delete(&self, bucketlist_id: i32, item_id: i32) -> Result<(), ItemRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::BucketlistId.eq(bucketlist_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ItemRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ItemRepositoryError {
    ItemRepositoryError::DatabaseError(e.to_string())
}
