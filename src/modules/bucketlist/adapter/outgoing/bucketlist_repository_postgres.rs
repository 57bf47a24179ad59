use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists::{
    ActiveModel, Column, Entity,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistRepository, BucketlistRepositoryError, BucketlistResult, CreateBucketlistData,
    UpdateBucketlistData,
};
use crate::modules::item::adapter::outgoing::sea_orm_entity::items;

#[derive(Clone)]
pub struct BucketlistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BucketlistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BucketlistRepository for BucketlistRepositoryPostgres {
    async fn create(
        &self,
        data: CreateBucketlistData,
    ) -> Result<BucketlistResult, BucketlistRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            user_id: Set(data.owner.value()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        data: UpdateBucketlistData,
    ) -> Result<BucketlistResult, BucketlistRepositoryError> {
        let name = match data.name {
            Some(name) => name,
            None => {
                // Nothing to change; still answer with the owned row
                return Entity::find_by_id(bucketlist_id)
                    .filter(Column::UserId.eq(owner.value()))
                    .one(&*self.db)
                    .await
                    .map_err(map_db_err)?
                    .map(BucketlistResult::from)
                    .ok_or(BucketlistRepositoryError::NotFound);
            }
        };

        let mut model = <ActiveModel as Default>::default();
        model.name = Set(name);
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(bucketlist_id))
            .filter(Column::UserId.eq(owner.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(BucketlistResult::from)
            .ok_or(BucketlistRepositoryError::NotFound)
    }

    async fn delete(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<(), BucketlistRepositoryError> {
        // Dropping `txn` on any early return rolls everything back
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let owned = Entity::find_by_id(bucketlist_id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if owned.is_none() {
            return Err(BucketlistRepositoryError::NotFound);
        }

        let removed_items = items::Entity::delete_many()
            .filter(items::Column::BucketlistId.eq(bucketlist_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        Entity::delete_many()
            .filter(Column::Id.eq(bucketlist_id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(
            bucketlist_id,
            items = removed_items.rows_affected,
            "Bucketlist removed with its items"
        );

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> BucketlistRepositoryError {
    BucketlistRepositoryError::DatabaseError(e.to_string())
}
