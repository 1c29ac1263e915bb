//! Application configuration module
//!
//! `AppConfig` is built once at startup, either from the environment
//! (`AppConfig::from_env`) or through the builder, and then handed to the
//! components that need a piece of it. Nothing else reads the environment.
//!
//! # Environment
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `DATABASE_URL` | - | Full connection string; wins over the `DB_*` parts |
//! | `DB_HOST` / `DB_PORT` | `localhost` / `5432` | Database server |
//! | `DB_USER` / `DB_PASSWORD` / `DB_NAME` | - | Credentials and database |
//! | `PORT` | `3000` | Listening port |
//! | `JWT_SECRET` | - (required) | Token signing secret |
//! | `BCRYPT_COST` | `10` | Password hashing work factor |
//! | `TOKEN_TTL_SECS` | `86400` | Lifetime of issued tokens |

use std::fmt;

use thiserror::Error;

/// Work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Issued tokens live one day unless configured otherwise
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_PORT: u16 = 3000;

// bcrypt rejects anything outside this range
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Where the relational database lives
#[derive(Clone, PartialEq)]
pub enum DatabaseSettings {
    /// A ready-made connection string
    Url(String),
    /// Individual parts, handed to the driver one by one
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

// Keeps passwords out of logs
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(_) => f.write_str("DatabaseSettings::Url(<redacted>)"),
            Self::Parts {
                host, port, user, name, ..
            } => f
                .debug_struct("DatabaseSettings::Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub port: u16,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    pub token_ttl_secs: u64,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        } else {
            builder = builder.database_parts(
                get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                parse_or(get("DB_PORT"), "DB_PORT", 5432)?,
                get("DB_USER").ok_or(ConfigError::MissingValue("DB_USER"))?,
                get("DB_PASSWORD").unwrap_or_default(),
                get("DB_NAME").ok_or(ConfigError::MissingValue("DB_NAME"))?,
            );
        }

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }

        builder
            .port(parse_or(get("PORT"), "PORT", DEFAULT_PORT)?)
            .bcrypt_cost(parse_or(get("BCRYPT_COST"), "BCRYPT_COST", DEFAULT_BCRYPT_COST)?)
            .token_ttl_secs(parse_or(
                get("TOKEN_TTL_SECS"),
                "TOKEN_TTL_SECS",
                DEFAULT_TOKEN_TTL_SECS,
            )?)
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database: Option<DatabaseSettings>,
    port: Option<u16>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    token_ttl_secs: Option<u64>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database = Some(DatabaseSettings::Url(url.into()));
        self
    }

    pub fn database_parts(
        mut self,
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.database = Some(DatabaseSettings::Parts {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            name: name.into(),
        });
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.token_ttl_secs = Some(ttl);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database: self.database.ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
