use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::shared::api::MessageBody;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, RegisterUserRequest, RegisterUserResponse, RegisteredUser,
};
use crate::modules::bucketlist::adapter::incoming::web::routes::{
    CreateBucketlistRequest, UpdateBucketlistRequest,
};
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;
use crate::modules::item::adapter::incoming::web::routes::{CreateItemRequest, UpdateItemRequest};
use crate::modules::item::application::ports::outgoing::ItemResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bucketlist API",
        version = "1.0.0",
        description = "Bucketlists and their items, scoped to the signed-in user",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,

        // Bucketlists
        crate::modules::bucketlist::adapter::incoming::web::routes::create_bucketlist_handler,
        crate::modules::bucketlist::adapter::incoming::web::routes::get_bucketlists_handler,
        crate::modules::bucketlist::adapter::incoming::web::routes::get_single_bucketlist_handler,
        crate::modules::bucketlist::adapter::incoming::web::routes::update_bucketlist_handler,
        crate::modules::bucketlist::adapter::incoming::web::routes::delete_bucketlist_handler,

        // Items
        crate::modules::item::adapter::incoming::web::routes::create_item_handler,
        crate::modules::item::adapter::incoming::web::routes::get_items_handler,
        crate::modules::item::adapter::incoming::web::routes::get_single_item_handler,
        crate::modules::item::adapter::incoming::web::routes::update_item_handler,
        crate::modules::item::adapter::incoming::web::routes::delete_item_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            MessageBody,

            RegisterUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,

            CreateBucketlistRequest,
            UpdateBucketlistRequest,
            BucketlistResult,

            CreateItemRequest,
            UpdateItemRequest,
            ItemResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and account endpoints"),
        (name = "bucketlists", description = "Bucketlist management endpoints"),
        (name = "items", description = "Items inside a bucketlist"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
