//! Database connection pool management
//!
//! Wraps a sqlx `MySqlPool` built lazily from fixed connection parameters.
//! Connections are opened on first use and handed out as `PoolConnection`
//! guards that go back to the pool when dropped.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql, MySqlPool};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection before giving up.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection parameters for the tasks database.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: "taskdb".to_string(),
            port: 3306,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

// Password is never printed.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Create config from environment variables.
    ///
    /// Reads `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT`,
    /// `DB_MAX_CONNECTIONS` and `DB_ACQUIRE_TIMEOUT` (seconds); unset or
    /// unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: var("DB_HOST").unwrap_or(defaults.host),
            user: var("DB_USER").unwrap_or(defaults.user),
            password: var("DB_PASSWORD").unwrap_or(defaults.password),
            database: var("DB_NAME").unwrap_or(defaults.database),
            port: var("DB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_connections),
            acquire_timeout: var("DB_ACQUIRE_TIMEOUT")
                .and_then(|secs| secs.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
        }
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Pool error type
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
}

/// Shared pool of MySQL connections.
///
/// Cheap to clone; all clones share the same connections.
#[derive(Clone, Debug)]
pub struct TaskPool {
    pool: MySqlPool,
}

impl TaskPool {
    /// Build a pool without opening any connection yet.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = TaskPool::connect_lazy(&DbConfig::default());
    /// pool.verify().await.ok();
    /// ```
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }

    /// Wait for a connection. It is released when the guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Connection`] when the database is unreachable,
    /// rejects the credentials, or no connection frees up within the
    /// acquire timeout.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>, PoolError> {
        self.pool.acquire().await.map_err(PoolError::Connection)
    }

    /// Acquire one connection, ping it and drop it, logging the outcome.
    pub async fn verify(&self) -> Result<(), PoolError> {
        match self.ping().await {
            Ok(()) => {
                tracing::info!("database connection established");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to connect to the database");
                Err(e)
            }
        }
    }

    async fn ping(&self) -> Result<(), PoolError> {
        let mut conn = self.acquire().await?;
        conn.ping().await.map_err(PoolError::Connection)
    }

    /// Executor for single statements: acquires, runs and releases internally.
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
