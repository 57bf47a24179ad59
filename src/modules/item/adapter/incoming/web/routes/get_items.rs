use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::adapter::incoming::web::routes::bucketlist_not_found;
use crate::modules::item::application::ports::incoming::use_cases::GetItemsError;
use crate::modules::item::application::ports::outgoing::ItemResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/bucketlists/{bucketlist_id}/items",
    tag = "items",
    params(("bucketlist_id" = i32, Path, description = "Parent bucketlist id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Items of the bucketlist", body = inline(SuccessResponse<Vec<ItemResult>>)),
        (status = 400, description = "Bucketlist not found or not owned", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/bucketlists/{bucketlist_id}/items")]
pub async fn get_items_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucketlist_id = path.into_inner();

    match data
        .item
        .get_list
        .execute(user.user_id, bucketlist_id)
        .await
    {
        Ok(items) => ApiResponse::success(items),

        Err(GetItemsError::BucketlistNotFound) => bucketlist_not_found(bucketlist_id),

        Err(GetItemsError::RepositoryError(e)) => {
            error!("Repository error listing items of {}: {}", bucketlist_id, e);
            ApiResponse::internal_error()
        }
    }
}
