//! Database error types and conversions.

use thiserror::Error;

/// Errors that can occur during database operations.
///
/// Raw `sqlx` errors are categorized on the way out of the data layer so
/// callers can log constraint problems with specifics while the HTTP layer
/// keeps its uniform failure mapping.
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found
    #[error("Entity not found")]
    NotFound,

    /// Foreign key constraint violation
    #[error("Foreign key violation on {table}: {message}")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: String,
        message: String,
    },

    /// Any other database error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => DbError::ForeignKeyViolation {
                constraint: db_err.constraint().map(|c| c.to_string()),
                table: db_err.table().unwrap_or("unknown").to_string(),
                message: db_err.message().to_string(),
            },
            err => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Result type alias for database operations
pub type Result<T> = std::result::Result<T, DbError>;
