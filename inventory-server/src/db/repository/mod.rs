//! Repository Module
//!
//! Free functions over any sqlx executor of the `Any` driver, so the same call
//! works with `&pool` or inside a transaction with `&mut *tx`. Each function
//! issues exactly one statement.

pub mod inventory_log;
pub mod material;
pub mod product;
pub mod sale;
pub mod vision_log;

use sqlx::{Any, AnyPool, Transaction};
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => {
                // The cause stays in the log, the caller only sees the code
                tracing::error!(error = %msg, "Database operation failed");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Open a transaction; pass `&mut *tx` to the repository functions
pub async fn begin(pool: &AnyPool) -> RepoResult<Transaction<'static, Any>> {
    Ok(pool.begin().await?)
}

/// Commit a transaction opened with [`begin`]
pub async fn commit(tx: Transaction<'_, Any>) -> RepoResult<()> {
    Ok(tx.commit().await?)
}
