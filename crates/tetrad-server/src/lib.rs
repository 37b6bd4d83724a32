//! Preview server for the Tetrad landing page.
//!
//! Serves the rendered page next to its content documents and reloads open
//! tabs whenever a document changes.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{ReloadHub, ReloadMessage};
pub use server::{PreviewConfig, PreviewServer, ServerError};
pub use watcher::{ContentChange, ContentWatcher};
