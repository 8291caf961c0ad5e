use chrono::Duration;
use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

pub(crate) const DEFAULT_ADMIN_EMAIL: &str = "adamax@adamax.com";

/// One year.
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) database_url: String,
    pub(crate) jwt_secret: String,
    pub(crate) port: u16,
    pub(crate) log_level: String,
    pub(crate) admin_email: String,
    pub(crate) token_ttl_hours: i64,
    pub(crate) max_connections: u32,
}

impl Args {
    /// Reads `adamax.toml` (optional) and then the process environment.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", 9000)?
            .set_default("log_level", "info")?
            .set_default("admin_email", DEFAULT_ADMIN_EMAIL)?
            .set_default("token_ttl_hours", 24)?
            .set_default("max_connections", 5)?
            .add_source(config::File::with_name("adamax").required(false))
            .add_source(config::Environment::default())
            .build()?;

        let args = config.try_deserialize::<Args>()?;

        args.check()?;

        Ok(args)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url must not be empty"));
        }

        if self.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("jwt_secret must not be empty"));
        }

        if self.token_ttl_hours <= 0 {
            return Err(ConfigError::Invalid("token_ttl_hours must be positive"));
        }

        if self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::Invalid("token_ttl_hours must not exceed one year"));
        }

        Ok(())
    }

    pub(crate) fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.token_ttl_hours)
            .ok_or(ConfigError::Invalid("token_ttl_hours is out of range"))
    }
}
