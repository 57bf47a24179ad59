use actix_web::{delete, web, Responder};
use tracing::{error, info};

use super::item_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::adapter::incoming::web::routes::bucketlist_not_found;
use crate::modules::item::application::ports::incoming::use_cases::DeleteItemError;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/bucketlists/{bucketlist_id}/items/{item_id}",
    tag = "items",
    params(
        ("bucketlist_id" = i32, Path, description = "Parent bucketlist id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Item deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 400, description = "Bucketlist or item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/bucketlists/{bucketlist_id}/items/{item_id}")]
pub async fn delete_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (bucketlist_id, item_id) = path.into_inner();

    match data
        .item
        .delete
        .execute(user.user_id, bucketlist_id, item_id)
        .await
    {
        Ok(()) => {
            info!(bucketlist_id, item_id, "Item deleted");
            ApiResponse::success(MessageBody::new(format!(
                "Item with id {} deleted successfully.",
                item_id
            )))
        }
        Err(DeleteItemError::BucketlistNotFound) => bucketlist_not_found(bucketlist_id),
        Err(DeleteItemError::NotFound) => item_not_found(item_id),
        Err(DeleteItemError::RepositoryError(e)) => {
            error!("Repository error deleting item {}: {}", item_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::item::application::ports::incoming::use_cases::DeleteItemUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, token_provider};

    #[derive(Clone)]
    struct MockDeleteItemUseCase {
        result: Result<(), DeleteItemError>,
    }

    #[async_trait]
    impl DeleteItemUseCase for MockDeleteItemUseCase {
        async fn execute(
            &self,
            _owner: UserId,
            _bucketlist_id: i32,
            _item_id: i32,
        ) -> Result<(), DeleteItemError> {
            self.result.clone()
        }
    }

    async fn delete(result: Result<(), DeleteItemError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_delete_item(MockDeleteItemUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(delete_item_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/bucketlists/3/items/8")
            .insert_header(("Authorization", bearer_token(UserId::from(4))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_item_success() {
        let (status, body) = delete(Ok(())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "Item with id 8 deleted successfully.");
    }

    #[actix_web::test]
    async fn test_delete_missing_item() {
        let (status, body) = delete(Err(DeleteItemError::NotFound)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Item with id 8 not found.");
    }

    #[actix_web::test]
    async fn test_delete_from_foreign_bucketlist() {
        let (status, body) = delete(Err(DeleteItemError::BucketlistNotFound)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BUCKETLIST_NOT_FOUND");
    }
}
