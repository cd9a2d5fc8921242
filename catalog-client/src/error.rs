//! Store error types
//!
//! `StoreError` describes what went wrong talking to a backend. Accessors log
//! it and hand the caller the generic [`CatalogError`] for the operation.

use shared::CatalogError;
use thiserror::Error;

/// Backend error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request or response shape
    #[error("Invalid payload: {0}")]
    Invalid(String),

    /// Local file access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for backend operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Log a backend failure and replace it with the operation's generic error
pub(crate) fn collapse(
    kind: CatalogError,
    operation: &'static str,
) -> impl FnOnce(StoreError) -> CatalogError {
    move |err| {
        tracing::warn!(operation, error = %err, "{}", kind.label());
        kind
    }
}
