use sea_orm::entity::prelude::*;

use crate::modules::item::application::ports::outgoing::ItemResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,

    pub bucketlist_id: i32,

    #[sea_orm(default_value = false)]
    pub done: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists::Entity",
        from = "Column::BucketlistId",
        to = "crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bucketlists,
}

impl Related<crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Bucketlists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ItemResult {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date_created: model.created_at.with_timezone(&chrono::Utc),
            date_modified: model.updated_at.with_timezone(&chrono::Utc),
            bucketlist_id: model.bucketlist_id,
            done: model.done,
        }
    }
}
