//! Section content for the Tetrad site.
//!
//! Content documents are plain JSON files, one per page section. This crate
//! fetches them, holds them in load-once slots, and answers field lookups with
//! fallback semantics.

pub mod hydrate;
pub mod model;
pub mod slot;
pub mod source;

pub use hydrate::{hydrate, HydrationError};
pub use model::{display_text, is_truthy, ContentModel, ContentState};
pub use slot::ContentSlot;
pub use source::{ContentSource, FsSource, HttpSource};
