pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, bucketlist, item};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::bucketlist::adapter::outgoing::{BucketlistQueryPostgres, BucketlistRepositoryPostgres};
use crate::bucketlist::application::bucketlist_use_cases::BucketlistUseCases;
use crate::bucketlist::application::service::{
    CreateBucketlistService, DeleteBucketlistService, GetBucketlistsService,
    GetSingleBucketlistService, UpdateBucketlistService,
};

use crate::item::adapter::outgoing::{ItemQueryPostgres, ItemRepositoryPostgres};
use crate::item::application::item_use_cases::ItemUseCases;
use crate::item::application::service::{
    CreateItemService, DeleteItemService, GetItemsService, GetSingleItemService,
    UpdateItemService,
};

use crate::config::AppConfig;
use crate::shared::api::custom_json_config;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub bucketlist: BucketlistUseCases,
    pub item: ItemUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_app_state(
    db: &Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));

    let bucketlist_repo = BucketlistRepositoryPostgres::new(Arc::clone(db));
    let bucketlist_query = BucketlistQueryPostgres::new(Arc::clone(db));
    let item_repo = ItemRepositoryPostgres::new(Arc::clone(db));
    let item_query = ItemQueryPostgres::new(Arc::clone(db));

    let bucketlist = BucketlistUseCases {
        create: Arc::new(CreateBucketlistService::new(bucketlist_repo.clone())),
        get_list: Arc::new(GetBucketlistsService::new(bucketlist_query.clone())),
        get_single: Arc::new(GetSingleBucketlistService::new(bucketlist_query.clone())),
        update: Arc::new(UpdateBucketlistService::new(bucketlist_repo.clone())),
        delete: Arc::new(DeleteBucketlistService::new(bucketlist_repo)),
    };

    let item = ItemUseCases {
        create: Arc::new(CreateItemService::new(
            bucketlist_query.clone(),
            item_repo.clone(),
        )),
        get_list: Arc::new(GetItemsService::new(
            bucketlist_query.clone(),
            item_query.clone(),
        )),
        get_single: Arc::new(GetSingleItemService::new(
            bucketlist_query.clone(),
            item_query,
        )),
        update: Arc::new(UpdateItemService::new(
            bucketlist_query.clone(),
            item_repo.clone(),
        )),
        delete: Arc::new(DeleteItemService::new(bucketlist_query, item_repo)),
    };

    AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query,
            password_hasher,
            token_provider,
        )),
        delete_user_use_case: Arc::new(DeleteUserUseCase::new(user_repo)),
        bucketlist,
        item,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(BcryptHasher::new(config.bcrypt_cost));
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    let state = build_app_state(&db_arc, password_hasher, Arc::clone(&token_provider_arc));

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Bucketlists
    cfg.service(crate::bucketlist::adapter::incoming::web::routes::create_bucketlist_handler);
    cfg.service(crate::bucketlist::adapter::incoming::web::routes::get_bucketlists_handler);
    cfg.service(crate::bucketlist::adapter::incoming::web::routes::get_single_bucketlist_handler);
    cfg.service(crate::bucketlist::adapter::incoming::web::routes::update_bucketlist_handler);
    cfg.service(crate::bucketlist::adapter::incoming::web::routes::delete_bucketlist_handler);
    // Items
    cfg.service(crate::item::adapter::incoming::web::routes::create_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::get_items_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::get_single_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::update_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::delete_item_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
