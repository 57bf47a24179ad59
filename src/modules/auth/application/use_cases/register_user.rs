use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    user_repository::{CreateUserData, ReactivateUserData},
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

// ========================= Register Request =========================
/// Validated registration input. Fields are private so a use case can only
/// ever see trimmed, non-empty values and a normalized email.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterRequestError {
    #[error("Email address is invalid")]
    InvalidEmailFormat,

    #[error("First name and last name should be provided")]
    EmptyName,

    #[error("Password must be provided")]
    EmptyPassword,

    #[error("Password doesn't match confirmation")]
    PasswordMismatch,
}

impl RegisterRequest {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<Self, RegisterRequestError> {
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }

        let password = password.trim();
        let password_confirm = password_confirm.trim();
        if password.is_empty() || password_confirm.is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }
        if password != password_confirm {
            return Err(RegisterRequestError::PasswordMismatch);
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Outcome & Errors =========================
/// An already-registered email is an expected outcome, not a failure.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    Created(User),
    Reactivated(User),
    AlreadyExists,
}

#[derive(Debug, Clone, Error)]
pub enum RegisterUserError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterOutcome, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    async fn hash(&self, password: &str) -> Result<String, RegisterUserError> {
        self.password_hasher
            .hash_password(password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterOutcome, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::QueryError(e.to_string()))?;

        match existing {
            Some(user) if user.is_active => Ok(RegisterOutcome::AlreadyExists),

            Some(user) => {
                let password_hash = self.hash(&request.password).await?;
                let data = ReactivateUserData {
                    first_name: request.first_name,
                    last_name: request.last_name,
                    password_hash,
                };

                self.repository
                    .reactivate_user(user.id, data)
                    .await
                    .map(RegisterOutcome::Reactivated)
                    .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))
            }

            None => {
                let password_hash = self.hash(&request.password).await?;
                let data = CreateUserData {
                    first_name: request.first_name,
                    last_name: request.last_name,
                    email: request.email,
                    password_hash,
                };

                match self.repository.create_user(data).await {
                    Ok(user) => Ok(RegisterOutcome::Created(user)),
                    // Lost a race with a concurrent registration of the same email
                    Err(UserRepositoryError::UserAlreadyExists) => {
                        Ok(RegisterOutcome::AlreadyExists)
                    }
                    Err(e) => Err(RegisterUserError::RepositoryError(e.to_string())),
                }
            }
        }
    }
}
