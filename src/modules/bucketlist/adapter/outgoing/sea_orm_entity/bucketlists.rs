use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bucketlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,

    pub user_id: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(has_many = "crate::modules::item::adapter::outgoing::sea_orm_entity::items::Entity")]
    Items,
}

impl Related<crate::modules::item::adapter::outgoing::sea_orm_entity::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BucketlistResult {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date_created: model.created_at.with_timezone(&chrono::Utc),
            date_modified: model.updated_at.with_timezone(&chrono::Utc),
            created_by: UserId::from(model.user_id),
        }
    }
}
