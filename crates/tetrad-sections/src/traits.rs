//! The component interface every page section implements.

use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use tetrad_content::ContentState;

use crate::form::FORM_RELAY_ENDPOINT;

/// Render-time inputs that do not come from content documents.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Year shown in the footer copyright line
    pub year: i32,

    /// POST target declared on the contact form
    pub relay_endpoint: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            year: chrono::Local::now().year(),
            relay_endpoint: FORM_RELAY_ENDPOINT.to_string(),
        }
    }
}

/// Errors that can occur while rendering a section.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Asks the host to re-render the section that holds it.
#[derive(Clone)]
pub struct Invalidator(Arc<dyn Fn() + Send + Sync>);

impl Invalidator {
    /// Wrap a callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// An invalidator that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Request a re-render.
    pub fn invalidate(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Invalidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalidator")
    }
}

/// A page section mounted by the host renderer.
///
/// The host owns the section's content state. It fetches `source()` once after
/// `on_mount` and calls `render` again whenever that state or the section's
/// own UI state changes.
pub trait Section: Send + Sync {
    /// Custom element tag name (e.g., "hero-section")
    fn tag(&self) -> &'static str;

    /// Short name used in log lines (e.g., "hero")
    fn label(&self) -> &'static str;

    /// Site path of the content document, if the section has one.
    fn source(&self) -> Option<&'static str> {
        None
    }

    /// Called once when the section joins the page.
    ///
    /// Sections with local UI state keep `invalidate` to request re-renders.
    fn on_mount(&self, invalidate: Invalidator) {
        let _ = invalidate;
    }

    /// Called once when the section leaves the page.
    fn on_unmount(&self) {}

    /// Render markup from the current content state.
    fn render(&self, state: &ContentState, ctx: &RenderContext) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn invalidator_runs_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let invalidate = Invalidator::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        invalidate.invalidate();
        invalidate.clone().invalidate();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn default_context_uses_form_relay() {
        let ctx = RenderContext::default();

        assert_eq!(ctx.relay_endpoint, FORM_RELAY_ENDPOINT);
        assert!(ctx.year >= 2024);
    }
}
