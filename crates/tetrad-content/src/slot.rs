//! Observable, load-once holder for a section's content.

use tokio::sync::watch;

use crate::model::{ContentModel, ContentState};

/// Holds one section's [`ContentState`] and notifies subscribers when it loads.
///
/// The state moves from `Empty` to `Loaded` at most once. Later loads are ignored.
#[derive(Debug)]
pub struct ContentSlot {
    tx: watch::Sender<ContentState>,
}

impl ContentSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ContentState::Empty);
        Self { tx }
    }

    /// Replace the empty state with `model`.
    ///
    /// Returns `false` without touching the state if it was already loaded.
    pub fn load(&self, model: ContentModel) -> bool {
        let mut model = Some(model);
        let loaded = self.tx.send_if_modified(|state| {
            if state.is_loaded() {
                return false;
            }
            if let Some(model) = model.take() {
                *state = ContentState::Loaded(model);
            }
            true
        });

        if !loaded {
            tracing::debug!("Ignoring second content load");
        }
        loaded
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> ContentState {
        self.tx.borrow().clone()
    }

    /// Whether a document has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.tx.borrow().is_loaded()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.tx.subscribe()
    }
}

impl Default for ContentSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let slot = ContentSlot::new();

        assert_eq!(slot.snapshot(), ContentState::Empty);
    }

    #[test]
    fn loads_exactly_once() {
        let slot = ContentSlot::new();

        assert!(slot.load(ContentModel::new(json!({"title": "First"}))));
        assert!(!slot.load(ContentModel::new(json!({"title": "Second"}))));

        assert_eq!(
            slot.snapshot().model().text_or("title", ""),
            "First".to_string()
        );
    }

    #[tokio::test]
    async fn notifies_subscribers_on_load() {
        let slot = ContentSlot::new();
        let mut rx = slot.subscribe();

        slot.load(ContentModel::new(json!({})));

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_loaded());
    }
}
