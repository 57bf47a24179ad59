use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::register_user::{
    RegisterOutcome, RegisterRequest, RegisterRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
    #[schema(example = "SecurePass123!")]
    pub password_confirm: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = 1)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "User registration successful.")]
    pub message: String,
    pub user: RegisteredUser,
}

/// Register a new account
///
/// Registering again with the email of a deactivated account brings that
/// account back with the new names and password.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<RegisterUserResponse>)),
        (status = 400, description = "Invalid input or password mismatch", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(
        &dto.first_name,
        &dto.last_name,
        &dto.email,
        &dto.password,
        &dto.password_confirm,
    ) {
        Ok(request) => request,
        Err(RegisterRequestError::PasswordMismatch) => {
            return ApiResponse::bad_request(
                "PASSWORD_MISMATCH",
                &RegisterRequestError::PasswordMismatch.to_string(),
            );
        }
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(RegisterOutcome::Created(user)) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(RegisterUserResponse {
                message: "User registration successful.".to_string(),
                user: user.into(),
            })
        }

        Ok(RegisterOutcome::Reactivated(user)) => {
            info!(user_id = %user.id, "Deactivated user registered again");
            ApiResponse::created(RegisterUserResponse {
                message: "User registration successful.".to_string(),
                user: user.into(),
            })
        }

        Ok(RegisterOutcome::AlreadyExists) => {
            warn!("Registration attempted with an active email");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists. Please login.")
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisterUserError,
    };
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_user;

    #[derive(Clone)]
    struct MockRegisterUserUseCase {
        result: Result<RegisterOutcome, RegisterUserError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterUserUseCase {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisterOutcome, RegisterUserError> {
            self.result.clone()
        }
    }

    fn payload() -> Value {
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "Jane@Example.com",
            "password": "secret",
            "password_confirm": "secret"
        })
    }

    async fn call(
        result: Result<RegisterOutcome, RegisterUserError>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterUserUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_register_user_created() {
        let (status, body) = call(
            Ok(RegisterOutcome::Created(test_user(UserId::from(1)))),
            payload(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "User registration successful.");
        assert_eq!(body["data"]["user"]["id"], 1);
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_register_user_reactivated_is_created() {
        let (status, body) = call(
            Ok(RegisterOutcome::Reactivated(test_user(UserId::from(8)))),
            payload(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"]["id"], 8);
    }

    #[actix_web::test]
    async fn test_register_user_already_exists_conflict() {
        let (status, body) = call(Ok(RegisterOutcome::AlreadyExists), payload()).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_register_user_invalid_email() {
        let mut body = payload();
        body["email"] = json!("not-an-email");

        let (status, body) = call(Ok(RegisterOutcome::AlreadyExists), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_user_blank_name() {
        let mut body = payload();
        body["last_name"] = json!("   ");

        let (status, body) = call(Ok(RegisterOutcome::AlreadyExists), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_user_password_mismatch() {
        let mut body = payload();
        body["password_confirm"] = json!("different");

        let (status, body) = call(Ok(RegisterOutcome::AlreadyExists), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "PASSWORD_MISMATCH");
    }

    #[actix_web::test]
    async fn test_register_user_missing_field_is_validation_error() {
        let (status, body) = call(
            Ok(RegisterOutcome::AlreadyExists),
            json!({ "email": "jane@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_user_repository_error_is_internal() {
        let (status, body) = call(
            Err(RegisterUserError::RepositoryError("db down".to_string())),
            payload(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("db down"));
    }
}
