pub mod item_query;
pub mod item_repository;

pub use item_query::{ItemQuery, ItemQueryError};
pub use item_repository::{
    CreateItemData, ItemRepository, ItemRepositoryError, ItemResult, UpdateItemData,
};
