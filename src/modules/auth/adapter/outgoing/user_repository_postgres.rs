use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, ReactivateUserData,
};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_error)?;

        Ok(inserted.into())
    }

    async fn reactivate_user(
        &self,
        user_id: UserId,
        data: ReactivateUserData,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.first_name = Set(data.first_name);
        active_user.last_name = Set(data.last_name);
        active_user.password_hash = Set(data.password_hash);
        active_user.is_active = Set(true);

        let reactivated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(reactivated.into())
    }

    async fn soft_delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(false))
            .col_expr(
                UserColumn::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_many()
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
