//! Data models
//!
//! Documents of the `goods` and `posters` collections as the store returns them,
//! plus the derived presentation types.

pub mod item;
pub mod poster;
pub mod tag;

// Re-exports
pub use item::*;
pub use poster::*;
pub use tag::*;
