//! Catalog error taxonomy
//!
//! Every failure of a remote call collapses into one generic kind per
//! operation. The underlying cause is logged where it happens and is not
//! carried to the caller.
//!
//! # Error Code Ranges
//!
//! - 61xx: Goods errors
//! - 62xx: Media errors
//!
//! # Example
//!
//! ```
//! use shared::error::CatalogError;
//!
//! let err = CatalogError::QueryFailed;
//! assert_eq!(err.label(), "query failed");
//! assert_eq!(err.code(), 6101);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic failure of a catalog operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogError {
    /// Any read (count, page, filter query) failed or found nothing
    #[error("query failed")]
    QueryFailed,
    /// Insert rejected by the store
    #[error("create failed")]
    CreateFailed,
    /// Update rejected by the store
    #[error("update failed")]
    UpdateFailed,
    /// Toggling the shelf flag of a beer failed
    #[error("take-down failed")]
    HideFailed,
    /// Hard delete rejected by the store
    #[error("delete failed")]
    DeleteFailed,
    /// Selecting, uploading or recording an image failed
    #[error("upload failed")]
    UploadFailed,
}

impl CatalogError {
    /// Stable numeric code
    pub const fn code(&self) -> u16 {
        match self {
            CatalogError::QueryFailed => 6101,
            CatalogError::CreateFailed => 6102,
            CatalogError::UpdateFailed => 6103,
            CatalogError::HideFailed => 6104,
            CatalogError::DeleteFailed => 6105,
            CatalogError::UploadFailed => 6201,
        }
    }

    /// Short human-readable label for display
    pub const fn label(&self) -> &'static str {
        match self {
            CatalogError::QueryFailed => "query failed",
            CatalogError::CreateFailed => "create failed",
            CatalogError::UpdateFailed => "update failed",
            CatalogError::HideFailed => "take-down failed",
            CatalogError::DeleteFailed => "delete failed",
            CatalogError::UploadFailed => "upload failed",
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
