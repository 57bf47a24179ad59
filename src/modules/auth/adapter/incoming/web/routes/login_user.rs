use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for every protected endpoint
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,
}

/// User login
///
/// Authenticates with email and password and returns a signed access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
            })
        ),
        (status = 400, description = "Invalid input or unknown email", body = ErrorResponse),
        (
            status = 401,
            description = "Wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "WRONG_PASSWORD", "message": "Wrong password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(LoginResponse {
            token: response.token,
        }),

        Err(LoginError::UserNotFound) => {
            warn!("Login failed: email not found");
            ApiResponse::bad_request("EMAIL_NOT_FOUND", "Email not found")
        }

        Err(LoginError::WrongPassword) => {
            warn!("Login failed: wrong password");
            ApiResponse::unauthorized("WRONG_PASSWORD", "Wrong password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
