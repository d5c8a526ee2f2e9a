//! Database Module
//!
//! Owns the connection pool. The backend (PostgreSQL or SQLite) is picked at
//! runtime from the URL scheme; both run through sqlx's `Any` driver so the
//! repositories are written once.

pub mod repository;
pub mod seed;

use std::time::Duration;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::utils::AppError;

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    Postgres,
    Sqlite,
}

impl DbBackend {
    /// Resolve the backend from a connection URL and return the URL to connect with
    ///
    /// `file:path` is rewritten to `sqlite:path`; SQLite file databases get
    /// `mode=rwc` so a missing file is created.
    pub fn from_url(url: &str) -> Result<(Self, String), AppError> {
        let url = url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok((Self::Postgres, url.to_string()));
        }

        let sqlite_url = if let Some(rest) = url.strip_prefix("file:") {
            format!("sqlite:{rest}")
        } else if url.starts_with("sqlite:") {
            url.to_string()
        } else {
            return Err(AppError::with_message(
                crate::utils::ErrorCode::ConfigError,
                format!("Unsupported DATABASE_URL scheme: {url}"),
            ));
        };

        if is_memory_url(&sqlite_url) || sqlite_url.contains("mode=") {
            return Ok((Self::Sqlite, sqlite_url));
        }
        let separator = if sqlite_url.contains('?') { '&' } else { '?' };
        Ok((Self::Sqlite, format!("{sqlite_url}{separator}mode=rwc")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Database service: owns the pool for the lifetime of the process
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: AnyPool,
    pub backend: DbBackend,
}

impl DbService {
    /// Connect, then apply the embedded migrations for the detected backend
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();

        let (backend, url) = DbBackend::from_url(database_url)?;

        // Every connection to `sqlite::memory:` is a separate database, so the
        // pool keeps exactly one connection open forever.
        let options = if backend == DbBackend::Sqlite && is_memory_url(&url) {
            AnyPoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            AnyPoolOptions::new()
                .max_connections(max_connections.max(1))
                .acquire_timeout(Duration::from_secs(10))
        };

        let pool = options
            .connect(&url)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(backend = backend.name(), "Database connection established");

        let service = Self { pool, backend };
        service.migrate().await?;
        Ok(service)
    }

    /// Apply the embedded migrations for this backend
    async fn migrate(&self) -> Result<(), AppError> {
        let result = match self.backend {
            DbBackend::Postgres => sqlx::migrate!("./migrations/postgres").run(&self.pool).await,
            DbBackend::Sqlite => sqlx::migrate!("./migrations/sqlite").run(&self.pool).await,
        };
        result.map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Round-trip check used by `/health`
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_url() {
        let (backend, url) = DbBackend::from_url("postgres://u:p@localhost/inv").unwrap();
        assert_eq!(backend, DbBackend::Postgres);
        assert_eq!(url, "postgres://u:p@localhost/inv");

        let (backend, _) = DbBackend::from_url("postgresql://localhost/inv").unwrap();
        assert_eq!(backend, DbBackend::Postgres);

        let (backend, url) = DbBackend::from_url("sqlite::memory:").unwrap();
        assert_eq!(backend, DbBackend::Sqlite);
        assert_eq!(url, "sqlite::memory:");

        let (_, url) = DbBackend::from_url("file:./data/inventory.db").unwrap();
        assert_eq!(url, "sqlite:./data/inventory.db?mode=rwc");

        let (_, url) = DbBackend::from_url("sqlite://inventory.db?cache=shared").unwrap();
        assert_eq!(url, "sqlite://inventory.db?cache=shared&mode=rwc");

        let (_, url) = DbBackend::from_url("sqlite:inventory.db?mode=ro").unwrap();
        assert_eq!(url, "sqlite:inventory.db?mode=ro");
    }

    #[test]
    fn test_backend_rejects_unknown_scheme() {
        let err = DbBackend::from_url("mysql://localhost/inv").unwrap_err();
        assert_eq!(err.code, crate::utils::ErrorCode::ConfigError);
    }

    #[tokio::test]
    async fn test_memory_database_migrates() {
        let db = DbService::new("sqlite::memory:", 5).await.unwrap();
        assert_eq!(db.backend, DbBackend::Sqlite);
        assert!(db.ping().await);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");
        let url = format!("file:{}", path.display());

        let db = DbService::new(&url, 2).await.unwrap();
        assert!(db.ping().await);
        db.close().await;
        assert!(path.exists());
    }
}
