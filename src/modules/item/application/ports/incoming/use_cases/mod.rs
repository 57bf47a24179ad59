mod create_item;
mod delete_item;
mod get_items;
mod get_single_item;
mod update_item;

pub use create_item::{CreateItemError, CreateItemUseCase};
pub use delete_item::{DeleteItemError, DeleteItemUseCase};
pub use get_items::{GetItemsError, GetItemsUseCase};
pub use get_single_item::{GetSingleItemError, GetSingleItemUseCase};
pub use update_item::{UpdateItemError, UpdateItemUseCase};
