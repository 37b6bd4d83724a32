//! Host renderer for the Tetrad landing page.
//!
//! Mounts page sections, hydrates each from its content document, and keeps
//! the assembled page current as documents arrive.

pub mod events;
pub mod host;
pub mod page;
pub mod standard;

pub use events::{RenderEvent, RenderHub};
pub use host::{Host, HostConfig, HostError, HydrationReport};
pub use page::{PageContext, PageTemplate, Region};
pub use standard::{render_standard_page, RenderedPage};
