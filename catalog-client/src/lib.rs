//! Catalog Client - data access for the taproom storefront
//!
//! Reads, annotates, orders and mutates `goods` and `posters` records held
//! in a remote document store, and uploads poster images.
//!
//! The store and media services are injected as trait objects so the
//! accessors run unchanged against the HTTP backend or the in-memory one.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod poster;
pub mod store;
pub mod wire;

pub use catalog::{CatalogAccessor, GOODS_COLLECTION, RemoveOutcome};
pub use config::ClientConfig;
pub use error::{StoreError, StoreResult};
pub use http::HttpStore;
pub use media::{ChooseMediaOptions, FileStorage, LocalFilePicker, MediaPicker, TempFile, UploadResult};
pub use poster::{POSTERS_COLLECTION, PosterAccessor};
pub use store::{AddResult, DocumentStore, Filter, MemoryFileStorage, MemoryStore, RemoveResult, UpdateResult};

// Re-export shared types for convenience
pub use shared::{AnnotatedItem, CatalogError, CatalogResult, Category, Item, Poster, PosterKind};
