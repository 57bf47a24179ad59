pub mod item_query_postgres;
pub mod item_repository_postgres;
pub mod sea_orm_entity;

pub use item_query_postgres::ItemQueryPostgres;
pub use item_repository_postgres::ItemRepositoryPostgres;
