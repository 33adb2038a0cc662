//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open a connection (network, auth, unknown database).
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement or transaction failed on an open connection.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Invalid or missing connection settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
