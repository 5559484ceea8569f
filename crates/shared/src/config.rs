//! Configuration management using environment variables
//!
//! # Security
//!
//! - Release builds require `JWT_SECRET` with at least 32 characters and no
//!   known weak pattern
//! - Debug builds fall back to a development secret and log an error about it
//!
//! The loaded [`Config`] is passed explicitly to everything that needs it;
//! nothing here is read lazily from the environment at request time.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Development-only signing secret used when `JWT_SECRET` is absent
const DEV_JWT_SECRET: &str = "deadpoets_dev_secret_change_in_production";

/// Default token lifetime: 7 days
const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24 * 7;

/// Substrings that mark a signing secret as guessable
const WEAK_PATTERNS: &[&str] = &[
    "dev_secret",
    "deadpoets",
    "change_me",
    "changeme",
    "example",
    "secret",
    "password",
    "default",
];

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub auth: AuthConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL (`DATABASE_URL`), wins over the components below
    pub url: Option<String>,

    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Database name
    pub name: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to keep warm
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// SSL mode for the connection
    /// Options: disable, allow, prefer, require, verify-ca, verify-full
    pub ssl_mode: String,
}

impl DatabaseConfig {
    /// Build a PostgreSQL connection URL
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.user, self.password, self.host, self.port, self.name, self.ssl_mode
        )
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path prefix every route is mounted under ("" mounts at the root)
    pub api_prefix: String,
}

/// Token signing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,

    /// Token lifetime in hours
    pub jwt_expiration_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();
        let password = match (&database_url, env::var("DB_PASSWORD")) {
            (_, Ok(password)) => password,
            (Some(_), Err(_)) => String::new(),
            (None, Err(_)) => {
                return Err(Error::config(
                    "Either DATABASE_URL or DB_PASSWORD must be set",
                ))
            }
        };

        let jwt_expiration_hours: i64 =
            parse_env("JWT_EXPIRATION_HOURS", DEFAULT_JWT_EXPIRATION_HOURS)?;
        if jwt_expiration_hours <= 0 {
            return Err(Error::config("JWT_EXPIRATION_HOURS must be positive"));
        }

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parse_env("DB_PORT", 5432)?,
                name: env::var("DB_NAME").unwrap_or_else(|_| "deadpoets".to_string()),
                user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                password,
                max_connections: parse_env("DB_MAX_CONNECTIONS", 20)?,
                min_connections: parse_env("DB_MIN_CONNECTIONS", 2)?,
                acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT", 5)?,
                ssl_mode: env::var("DB_SSL_MODE").unwrap_or_else(|_| {
                    if cfg!(debug_assertions) {
                        "prefer".to_string()
                    } else {
                        "require".to_string()
                    }
                }),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env("SERVER_PORT", 5000)?,
                api_prefix: normalize_prefix(&env::var("API_PREFIX").unwrap_or_default()),
            },
            auth: AuthConfig {
                jwt_secret: Self::load_jwt_secret()?,
                jwt_expiration_hours,
            },
        })
    }

    /// Load the signing secret, enforcing the release-build requirements
    fn load_jwt_secret() -> Result<String> {
        let production = !cfg!(debug_assertions);

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if production => {
                return Err(Error::config(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
            Err(_) => {
                tracing::warn!(
                    "JWT_SECRET not set - using development default. DO NOT use in production!"
                );
                DEV_JWT_SECRET.to_string()
            }
        };

        validate_jwt_secret(&secret, production)?;
        Ok(secret)
    }
}

/// Check a signing secret against the length and weak-pattern rules
///
/// In production every violation is an error; otherwise violations are
/// logged and accepted.
pub fn validate_jwt_secret(secret: &str, production: bool) -> Result<()> {
    if secret.is_empty() {
        return Err(Error::config("JWT_SECRET must not be empty"));
    }

    if production && secret.len() < 32 {
        return Err(Error::config(format!(
            "JWT_SECRET must be at least 32 characters. Current length: {} characters. \
             Generate a secure secret with: openssl rand -base64 32",
            secret.len()
        )));
    }

    let secret_lower = secret.to_lowercase();
    if let Some(pattern) = WEAK_PATTERNS.iter().find(|p| secret_lower.contains(*p)) {
        if production {
            return Err(Error::config(format!(
                "JWT_SECRET contains weak pattern '{}'. \
                 Generate with: openssl rand -base64 32",
                pattern
            )));
        }
        tracing::error!(
            "JWT_SECRET contains weak pattern '{}'. \
             This is acceptable in development but MUST be changed for production!",
            pattern
        );
    }

    Ok(())
}

/// Turn `API_PREFIX` into either "" or "/segment" without a trailing slash
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_env<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
