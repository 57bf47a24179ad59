use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_TOKEN_DURATION: &str = "3600";
const MAX_TOKEN_DURATION: i64 = 86400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_duration: i64, // Lifetime of an access token, in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    /// Expects `.env` files to be loaded by the caller.
    pub fn from_env() -> Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "bucketlist-api".to_string());
        let raw_duration = env::var("AUTH_TOKEN_DURATION")
            .unwrap_or_else(|_| DEFAULT_TOKEN_DURATION.to_string());
        let token_duration = raw_duration
            .parse::<i64>()
            .with_context(|| format!("Invalid AUTH_TOKEN_DURATION value `{raw_duration}`"))?;

        Self::validated(secret_key, issuer, token_duration)
    }

    fn validated(secret_key: String, issuer: String, token_duration: i64) -> Result<Self> {
        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        if token_duration <= 0 || token_duration > MAX_TOKEN_DURATION {
            bail!("AUTH_TOKEN_DURATION must be between 1 and {MAX_TOKEN_DURATION} seconds");
        }

        Ok(Self {
            secret_key,
            issuer,
            token_duration,
        })
    }
}
