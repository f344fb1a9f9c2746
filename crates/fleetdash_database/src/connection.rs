//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::r2d2::{Builder, ConnectionManager, Pool};
use fleetdash_error::{StoreError, StoreErrorKind, StoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

/// Shared connection pool, created once at startup.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Where the configuration database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual fields
    #[serde(default)]
    pub url: Option<String>,
    /// Database host
    #[serde(default = "default_host")]
    pub host: String,
    /// Database port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name
    #[serde(default)]
    pub name: String,
    /// Database user
    #[serde(default)]
    pub user: String,
    /// Database password
    #[serde(default)]
    pub password: String,
    /// Maximum pooled connections
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// How long a read waits for a pooled connection, in milliseconds
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_pool_size() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    5_000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_host(),
            port: default_port(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            pool_size: default_pool_size(),
            connection_timeout_ms: default_connection_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// Create a configuration from a full connection URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// The connection URL, assembled from the parts when no `url` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetdash_database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig {
    ///     name: "anisearch".into(),
    ///     user: "admin".into(),
    ///     password: "pw".into(),
    ///     ..DatabaseConfig::default()
    /// };
    /// assert_eq!(config.connection_url(), "postgres://admin:pw@localhost:5432/anisearch");
    /// ```
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

/// Build the shared connection pool without opening any connection yet.
///
/// Connections are opened on first use, so an unreachable database surfaces as a
/// [`StoreError`] from the first read instead of failing startup.
///
/// # Errors
///
/// Returns an error if the pool settings are invalid.
#[instrument(skip(config), fields(host = %config.host, port = config.port, pool_size = config.pool_size))]
pub fn lazy_pool(config: &DatabaseConfig) -> StoreResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.connection_url());
    Ok(pool_builder(config)?.build_unchecked(manager))
}

/// Build the shared connection pool and check the database is reachable.
///
/// One connection is checked out and returned immediately so an unreachable
/// database is reported at startup rather than on the first request.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the database is unreachable.
#[instrument(skip(config), fields(host = %config.host, port = config.port, pool_size = config.pool_size))]
pub fn establish_pool(config: &DatabaseConfig) -> StoreResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.connection_url());
    let pool = pool_builder(config)?
        .build(manager)
        .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;

    // Warm up the pool by getting and immediately releasing a connection
    {
        let _conn = pool.get()?;
    }

    info!("Connected to configuration database");
    Ok(pool)
}

/// Pool settings shared by both constructors. r2d2 panics on a zero size or timeout.
fn pool_builder(config: &DatabaseConfig) -> StoreResult<Builder<ConnectionManager<PgConnection>>> {
    if config.pool_size == 0 {
        return Err(StoreError::new(StoreErrorKind::Connection(
            "pool_size must be at least 1".to_string(),
        )));
    }
    if config.connection_timeout_ms == 0 {
        return Err(StoreError::new(StoreErrorKind::Connection(
            "connection_timeout_ms must be greater than 0".to_string(),
        )));
    }

    Ok(Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(Duration::from_millis(config.connection_timeout_ms)))
}
