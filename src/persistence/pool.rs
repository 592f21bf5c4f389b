//! Connection pooling over sqlx's Any driver
//!
//! The service runs against SQLite for single-box deployments and Postgres
//! or MySQL when a shared database server is available. The backend is picked
//! from the configured URL scheme once, at startup.

use crate::persistence::error::PersistenceError;
use crate::persistence::PersistenceConfig;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

/// How long to wait when acquiring a connection from the pool
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Sqlite,
    Postgres,
    Mysql,
}

impl DatabaseBackend {
    /// Pick the backend from a connection URL scheme
    pub fn from_url(url: &str) -> Result<Self, PersistenceError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            other => Err(PersistenceError::Connection(format!(
                "Unsupported database URL scheme '{}': expected sqlite://, postgres:// or mysql://",
                other
            ))),
        }
    }

    /// Backend name for log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite => "SQLite",
            Self::Postgres => "PostgreSQL",
            Self::Mysql => "MySQL",
        }
    }
}

/// Shared connection pool tagged with its backend
#[derive(Clone)]
pub struct ConnectionPool {
    pool: AnyPool,
    backend: DatabaseBackend,
}

impl ConnectionPool {
    /// Open a pool for the configured database
    pub async fn connect(config: &PersistenceConfig) -> Result<Self, PersistenceError> {
        // The Any driver resolves nothing until its drivers are registered
        sqlx::any::install_default_drivers();

        let backend = DatabaseBackend::from_url(&config.url)?;

        tracing::info!(
            "Opening {} pool ({} connections max)",
            backend.name(),
            config.max_connections
        );

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(&config.url)
            .await
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        Ok(Self { pool, backend })
    }

    /// The underlying sqlx pool, for queries and transactions
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// The backend this pool was opened against
    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Round-trip a trivial query to confirm the database is reachable
    pub async fn health_check(&self) -> Result<(), PersistenceError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| PersistenceError::Connection(format!("Database ping failed: {}", e)))?;
        Ok(())
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
