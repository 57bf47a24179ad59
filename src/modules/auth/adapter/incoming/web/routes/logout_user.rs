use actix_web::{get, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::{ApiResponse, MessageBody};

/// Logout
///
/// Tokens are not revoked server side; the client discards its token.
/// The call still requires a valid one so that only signed-in users hit it.
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<MessageBody>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/auth/logout")]
pub async fn logout_user_handler(user: AuthenticatedUser) -> impl Responder {
    info!(user_id = %user.user_id, "User logged out");
    ApiResponse::success(MessageBody::new("ok"))
}
