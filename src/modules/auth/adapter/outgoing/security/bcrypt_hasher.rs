use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Salted bcrypt hashing with a configurable work factor.
///
/// bcrypt is CPU bound, so both operations run on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::HashFailed)
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        tokio::task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::VerifyFailed)
    }
}
