//! Shared types for the taproom catalog
//!
//! Data model, presentation derivation and ordering rules used by the
//! catalog client, the mock store and the command-line front end.

pub mod annotate;
pub mod error;
pub mod link;
pub mod models;
pub mod ordering;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use annotate::annotate;
pub use error::{CatalogError, CatalogResult};
pub use link::{resolve_url, resolve_url_with};
pub use models::{AnnotatedItem, Category, Item, Poster, PosterKind, Scalar, Tag, TagKind};
pub use ordering::sort_items;
