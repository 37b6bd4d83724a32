//! Render notifications broadcast by the host.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Something observable happened to the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderEvent {
    /// A section's region was re-rendered
    Region {
        /// Custom element tag name
        tag: String,
        /// New markup for the region
        html: String,
    },

    /// Every hydration has finished
    Settled {
        /// Sections that loaded their document
        loaded: usize,
        /// Sections left on fallback copy
        failed: usize,
    },
}

/// Hub for broadcasting render events to any number of observers.
#[derive(Debug, Clone)]
pub struct RenderHub {
    sender: broadcast::Sender<RenderEvent>,
}

impl RenderHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Send an event to all observers.
    pub fn send(&self, event: RenderEvent) {
        // No observers is fine.
        let _ = self.sender.send(event);
    }

    /// Subscribe to render events.
    pub fn subscribe(&self) -> broadcast::Receiver<RenderEvent> {
        self.sender.subscribe()
    }
}

impl Default for RenderHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_events() {
        let hub = RenderHub::new();
        let mut rx = hub.subscribe();

        hub.send(RenderEvent::Settled { loaded: 8, failed: 0 });

        match rx.try_recv() {
            Ok(RenderEvent::Settled { loaded: 8, failed: 0 }) => {}
            other => panic!("Expected Settled event, got {:?}", other),
        }
    }

    #[test]
    fn serializes_events() {
        let event = RenderEvent::Region {
            tag: "hero-section".to_string(),
            html: "<section></section>".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""type":"region""#));
        assert!(json.contains("hero-section"));
    }
}
