/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (optionally seeded from a `.env` file by the binary).
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default                          |
 * |----------------|----------|----------------------------------|
 * | `JWT_SECRET`   | yes      |                                  |
 * | `DATABASE_URL` | no       | `sqlite://bookmarks.db?mode=rwc` |
 * | `SERVER_HOST`  | no       | `0.0.0.0`                        |
 * | `SERVER_PORT`  | no       | `3000`                           |
 *
 * # Error Handling
 *
 * A missing or weak `JWT_SECRET` is fatal: the server must not come up and
 * hand out tokens signed with a guessable key.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Shortest accepted signing secret, in bytes
pub const MIN_JWT_SECRET_LEN: usize = 32;

const DEFAULT_DATABASE_URL: &str = "sqlite://bookmarks.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set")]
    MissingJwtSecret,

    #[error("JWT_SECRET is too short ({actual} bytes, need at least {minimum})")]
    WeakJwtSecret { actual: usize, minimum: usize },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// HMAC signing secret for access tokens
///
/// Can only be built from a value of at least `MIN_JWT_SECRET_LEN` bytes.
#[derive(Clone)]
pub struct JwtSecret(String);

impl JwtSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakJwtSecret {
                actual: secret.len(),
                minimum: MIN_JWT_SECRET_LEN,
            });
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: JwtSecret,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingJwtSecret)?;
        let jwt_secret = JwtSecret::new(jwt_secret)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = match lookup("SERVER_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Connect to the database and bring the schema up to date
///
/// Unlike a missing optional service, a database that cannot be reached or
/// migrated stops startup: every endpoint depends on it.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Fresh, migrated in-memory database
///
/// An in-memory SQLite database lives only as long as its connection, so the
/// pool is pinned to a single connection that never expires.
pub async fn in_memory_database() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the embedded migrations in `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
