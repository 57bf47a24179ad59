mod create_item;
mod delete_item;
mod get_items;
mod get_single_item;
mod update_item;

use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;

pub use create_item::{__path_create_item_handler, create_item_handler, CreateItemRequest};
pub use delete_item::{__path_delete_item_handler, delete_item_handler};
pub use get_items::{__path_get_items_handler, get_items_handler};
pub use get_single_item::{__path_get_single_item_handler, get_single_item_handler};
pub use update_item::{__path_update_item_handler, update_item_handler, UpdateItemRequest};

pub fn item_not_found(item_id: i32) -> HttpResponse {
    ApiResponse::bad_request(
        "ITEM_NOT_FOUND",
        &format!("Item with id {} not found.", item_id),
    )
}
