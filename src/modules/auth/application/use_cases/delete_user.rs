use async_trait::async_trait;
use thiserror::Error;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserRequest {
    pub user_id: UserId,
    /// Remove the row instead of flagging it inactive
    pub deep_delete: bool,
}

#[derive(Debug, Clone, Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, request: DeleteUserRequest) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, request: DeleteUserRequest) -> Result<(), DeleteUserError> {
        let result = if request.deep_delete {
            self.repository.delete_user(request.user_id).await
        } else {
            self.repository.soft_delete_user(request.user_id).await
        };

        result.map_err(|e| match e {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            other => DeleteUserError::RepositoryError(other.to_string()),
        })
    }
}
