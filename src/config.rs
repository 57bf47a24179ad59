use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// bcrypt rejects work factors outside this range
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const PRODUCTION_BCRYPT_COST: u32 = 12;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load server configuration from environment variables.
    /// Expects `.env` files to be loaded by the caller.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        let production = get("RUST_ENV").as_deref() == Some("production");
        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid BCRYPT_COST value `{raw}`"))?,
            None if production => PRODUCTION_BCRYPT_COST,
            None => MIN_BCRYPT_COST,
        };
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}");
        }

        let run_migrations = match get("RUN_MIGRATIONS") {
            Some(raw) => raw
                .parse::<bool>()
                .with_context(|| format!("Invalid RUN_MIGRATIONS value `{raw}`"))?,
            None => true,
        };

        Ok(Self {
            database_url,
            host,
            port,
            bcrypt_cost,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/bucketlist")]).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.bcrypt_cost, MIN_BCRYPT_COST);
        assert!(config.run_migrations);
    }

    #[test]
    fn production_gets_a_stronger_bcrypt_cost() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/bucketlist"),
            ("RUST_ENV", "production"),
        ])
        .unwrap();

        assert_eq!(config.bcrypt_cost, PRODUCTION_BCRYPT_COST);
    }

    #[test]
    fn explicit_values_win() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/bucketlist"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("BCRYPT_COST", "10"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.bcrypt_cost, 10);
        assert!(!config.run_migrations);
    }

    #[test]
    fn database_url_is_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(load(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("BCRYPT_COST", "3")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("BCRYPT_COST", "32")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "maybe")]).is_err());
    }
}
