pub mod bucketlist_query_postgres;
pub mod bucketlist_repository_postgres;
pub mod sea_orm_entity;

pub use bucketlist_query_postgres::BucketlistQueryPostgres;
pub use bucketlist_repository_postgres::BucketlistRepositoryPostgres;
