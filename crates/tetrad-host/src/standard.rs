//! One-shot rendering of the standard landing page.

use std::sync::Arc;

use tetrad_content::ContentSource;
use tetrad_sections::StandardPage;

use crate::host::{Host, HostConfig, HostError, HydrationReport};

/// A fully hydrated page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Complete HTML document
    pub html: String,

    /// How many sections loaded their content
    pub report: HydrationReport,
}

/// Mount every standard section, wait for all hydrations, and render the page.
///
/// Sections whose content cannot be loaded keep their fallback copy.
pub async fn render_standard_page(
    source: Arc<dyn ContentSource>,
    config: HostConfig,
) -> Result<RenderedPage, HostError> {
    tracing::debug!("Rendering page from {}", source.describe());

    let mut host = Host::new(source, config);
    host.mount_all(StandardPage::new().sections)?;

    let report = host.settle().await?;
    let html = host.render_page()?;

    Ok(RenderedPage { html, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tetrad_content::FsSource;

    #[tokio::test]
    async fn renders_from_partial_content_dir() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("hero.json"),
            r#"{"tagline":"Four dimensions, one team"}"#,
        )
        .unwrap();
        fs::write(temp.path().join("blog.json"), "not json").unwrap();

        let page = render_standard_page(
            Arc::new(FsSource::new(temp.path())),
            HostConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.report.loaded, 1);
        assert_eq!(page.report.failed, 7);
        assert!(page.html.contains("Four dimensions, one team"));
        assert!(page.html.contains("Our Blog"));
        assert!(page.html.contains("<nav-bar>"));
        assert!(page.html.contains("<footer-section>"));
    }

    #[tokio::test]
    async fn renders_offline_with_fallback_copy() {
        let temp = tempdir().unwrap();

        let page = render_standard_page(
            Arc::new(FsSource::new(temp.path().join("missing"))),
            HostConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.report.loaded, 0);
        assert!(page.html.contains("Connect With Us"));
        assert!(page.html.contains("Our Solutions"));
    }
}
