use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_JWT_ISSUER: &str = "bucketlist-api-test";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_JWT_ISSUER.to_string(),
        token_duration: 3600,
    }
}

/// Shape the `AuthenticatedUser` extractor expects to find in app data
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

pub fn test_user(user_id: UserId) -> User {
    User {
        id: user_id,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("user{}@example.com", user_id),
        password_hash: "irrelevant".to_string(),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Ready-made `Authorization` header value
pub fn bearer_token(user_id: UserId) -> String {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(&test_user(user_id))
        .expect("test token should encode");

    format!("Bearer {}", token)
}

pub fn expired_bearer_token(user_id: UserId) -> String {
    let issued_at = Utc::now() - Duration::hours(2);
    let claims = TokenClaims {
        sub: user_id.value(),
        email: format!("user{}@example.com", user_id),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        iss: TEST_JWT_ISSUER.to_string(),
        exp: (issued_at + Duration::hours(1)).timestamp(),
        iat: issued_at.timestamp(),
        nbf: issued_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("test token should encode");

    format!("Bearer {}", token)
}
