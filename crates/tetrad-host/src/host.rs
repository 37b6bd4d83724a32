//! Host renderer: owns mounted sections and their regions of the page.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use tetrad_content::{hydrate, ContentSlot, ContentSource, ContentState};
use tetrad_sections::{Invalidator, RenderContext, RenderError, Section};

use crate::events::{RenderEvent, RenderHub};
use crate::page::{PageContext, PageTemplate, Region};

/// Configuration for a host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Document title
    pub title: String,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,

    /// Inline scripts appended to the page body
    pub scripts: Vec<String>,

    /// Render-time inputs passed to every section
    pub render: RenderContext,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "Tetrad AI".to_string(),
            styles: vec!["/css/main.css".to_string()],
            scripts: vec![],
            render: RenderContext::default(),
        }
    }
}

/// Errors that can occur while hosting sections.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Failed to render {tag}: {source}")]
    Render {
        tag: String,
        #[source]
        source: RenderError,
    },

    #[error("Failed to render page: {0}")]
    Page(#[from] minijinja::Error),

    #[error("Section already mounted: {0}")]
    AlreadyMounted(String),
}

/// Outcome of hydrating a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Sections that loaded their document
    pub loaded: usize,
    /// Sections left on fallback copy
    pub failed: usize,
}

/// Notifications from hydration tasks and sections back to the host.
#[derive(Debug)]
enum HostEvent {
    Hydrated { index: usize, loaded: bool },
    Invalidated(usize),
}

/// A section together with the state the host keeps for it.
struct Mounted {
    section: Arc<dyn Section>,
    slot: Arc<ContentSlot>,
    html: String,
}

/// Mounts sections, hydrates them, and keeps each section's region current.
///
/// Hydrations run as independent tokio tasks, so `mount` must be called from
/// within a runtime. Completion order between sections is unspecified.
pub struct Host {
    config: HostConfig,
    source: Arc<dyn ContentSource>,
    template: PageTemplate,
    mounted: Vec<Mounted>,
    tx: mpsc::UnboundedSender<HostEvent>,
    rx: mpsc::UnboundedReceiver<HostEvent>,
    pending: usize,
    report: HydrationReport,
    hub: RenderHub,
}

impl Host {
    /// Create a host that fetches content from `source`.
    pub fn new(source: Arc<dyn ContentSource>, config: HostConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            config,
            source,
            template: PageTemplate::new(),
            mounted: Vec::new(),
            tx,
            rx,
            pending: 0,
            report: HydrationReport::default(),
            hub: RenderHub::new(),
        }
    }

    /// Mount a section: render it with fallback copy, then start its hydration.
    pub fn mount(&mut self, section: Arc<dyn Section>) -> Result<(), HostError> {
        let tag = section.tag();
        if self.position(tag).is_some() {
            return Err(HostError::AlreadyMounted(tag.to_string()));
        }

        let index = self.mounted.len();
        let slot = Arc::new(ContentSlot::new());
        let html = render_section(section.as_ref(), &slot.snapshot(), &self.config.render)?;

        let tx = self.tx.clone();
        section.on_mount(Invalidator::new(move || {
            let _ = tx.send(HostEvent::Invalidated(index));
        }));

        if let Some(path) = section.source() {
            self.spawn_hydration(index, section.label(), path, Arc::clone(&slot));
        }

        tracing::debug!("Mounted {}", tag);
        self.mounted.push(Mounted {
            section,
            slot,
            html,
        });
        Ok(())
    }

    /// Mount several sections in page order.
    pub fn mount_all(
        &mut self,
        sections: impl IntoIterator<Item = Arc<dyn Section>>,
    ) -> Result<(), HostError> {
        for section in sections {
            self.mount(section)?;
        }
        Ok(())
    }

    fn spawn_hydration(
        &mut self,
        index: usize,
        label: &'static str,
        path: &'static str,
        slot: Arc<ContentSlot>,
    ) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.pending += 1;

        tokio::spawn(async move {
            let result = hydrate(source.as_ref(), label, path, |model| {
                slot.load(model);
            })
            .await;

            let _ = tx.send(HostEvent::Hydrated {
                index,
                loaded: result.is_ok(),
            });
        });
    }

    /// Wait for the next notification and re-render the affected region.
    ///
    /// Returns the tag of the re-rendered section, or `None` if it has since
    /// been unmounted.
    pub async fn step(&mut self) -> Result<Option<&'static str>, HostError> {
        match self.rx.recv().await {
            Some(event) => self.apply(event),
            // The host holds a sender, so this only happens mid-teardown.
            None => Ok(None),
        }
    }

    /// Handle every notification already queued, without waiting.
    pub fn process_pending(&mut self) -> Result<usize, HostError> {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Drive notifications until every hydration has finished.
    ///
    /// There is no timeout: a source that never answers keeps this pending.
    pub async fn settle(&mut self) -> Result<HydrationReport, HostError> {
        while self.pending > 0 {
            self.step().await?;
        }
        self.process_pending()?;

        tracing::debug!(
            "Hydration settled: {} loaded, {} on fallback",
            self.report.loaded,
            self.report.failed
        );
        self.hub.send(RenderEvent::Settled {
            loaded: self.report.loaded,
            failed: self.report.failed,
        });
        Ok(self.report)
    }

    fn apply(&mut self, event: HostEvent) -> Result<Option<&'static str>, HostError> {
        let index = match event {
            HostEvent::Hydrated { index, loaded } => {
                self.pending = self.pending.saturating_sub(1);
                if loaded {
                    self.report.loaded += 1;
                } else {
                    self.report.failed += 1;
                }
                index
            }
            HostEvent::Invalidated(index) => index,
        };

        self.rerender(index)
    }

    fn rerender(&mut self, index: usize) -> Result<Option<&'static str>, HostError> {
        let Some(mounted) = self.mounted.get_mut(index) else {
            return Ok(None);
        };
        let tag = mounted.section.tag();

        let html = render_section(
            mounted.section.as_ref(),
            &mounted.slot.snapshot(),
            &self.config.render,
        )?;

        if html != mounted.html {
            mounted.html = html.clone();
            self.hub.send(RenderEvent::Region {
                tag: tag.to_string(),
                html,
            });
        }
        Ok(Some(tag))
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.mounted.iter().position(|m| m.section.tag() == tag)
    }

    /// Current markup of a section's region.
    pub fn region(&self, tag: &str) -> Option<&str> {
        self.position(tag).map(|i| self.mounted[i].html.as_str())
    }

    /// Current content state of a section.
    pub fn state(&self, tag: &str) -> Option<ContentState> {
        self.position(tag).map(|i| self.mounted[i].slot.snapshot())
    }

    /// Observe a section's content state.
    pub fn watch(&self, tag: &str) -> Option<watch::Receiver<ContentState>> {
        self.position(tag).map(|i| self.mounted[i].slot.subscribe())
    }

    /// Tags of mounted sections, in page order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.mounted.iter().map(|m| m.section.tag()).collect()
    }

    /// Number of hydrations still in flight.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Subscribe to render events.
    pub fn subscribe(&self) -> broadcast::Receiver<RenderEvent> {
        self.hub.subscribe()
    }

    /// Assemble the full page from the current regions.
    pub fn render_page(&self) -> Result<String, HostError> {
        let page = PageContext {
            title: self.config.title.clone(),
            regions: self
                .mounted
                .iter()
                .map(|m| Region {
                    tag: m.section.tag().to_string(),
                    html: m.html.clone(),
                })
                .collect(),
            styles: self.config.styles.clone(),
            scripts: self.config.scripts.clone(),
        };

        Ok(self.template.render(&page)?)
    }

    /// Unmount every section. Hydrations still in flight finish into
    /// detached slots and are ignored.
    pub fn unmount_all(&mut self) {
        for mounted in self.mounted.drain(..) {
            mounted.section.on_unmount();
        }

        // Late notifications go to the old channel and are dropped.
        let (tx, rx) = mpsc::unbounded_channel();
        self.tx = tx;
        self.rx = rx;
        self.pending = 0;
        self.report = HydrationReport::default();
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

fn render_section(
    section: &dyn Section,
    state: &ContentState,
    ctx: &RenderContext,
) -> Result<String, HostError> {
    section.render(state, ctx).map_err(|source| HostError::Render {
        tag: section.tag().to_string(),
        source,
    })
}
