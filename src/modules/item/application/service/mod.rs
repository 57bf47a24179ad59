mod create_item_service;
mod delete_item_service;
mod get_items_service;
mod get_single_item_service;
mod update_item_service;

pub use create_item_service::CreateItemService;
pub use delete_item_service::DeleteItemService;
pub use get_items_service::GetItemsService;
pub use get_single_item_service::GetSingleItemService;
pub use update_item_service::UpdateItemService;
