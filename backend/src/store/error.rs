//! Store-specific error types

use thiserror::Error;

/// Errors raised by record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying database call failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No record matched the given SWIFT code
    #[error("SWIFT code {0} not found")]
    NotFound(String),

    /// A record with this code already exists
    #[error("SWIFT code {0} already exists")]
    Duplicate(String),

    /// Schema setup failed
    #[error("Migration failed: {0}")]
    Migration(String),
}
