use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

/// Login credentials that already passed validation.
///
/// The email is trimmed and lower-cased, so lookups match what
/// registration stored.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Please provide valid email credentials")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        let password = password.trim();
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password: password.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Error)]
pub enum LoginError {
    /// No active account uses this email
    #[error("Email not found")]
    UserNotFound,
    #[error("Wrong password")]
    WrongPassword,
    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub token: String,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

/// Checks credentials against an active account and issues an access token.
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Deactivated accounts can't log in until they register again
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .filter(|u| u.is_active)
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::WrongPassword);
        }

        let token = self
            .token_provider
            .generate_access_token(&user)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse { token })
    }
}
