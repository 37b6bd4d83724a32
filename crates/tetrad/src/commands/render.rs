//! Render the landing page to a static HTML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tetrad_host::render_standard_page;

use crate::commands::{config_root, content_source, host_config};
use crate::config::load_config;

/// Run the render command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, remote: Option<String>) -> Result<()> {
    let config = load_config(config_path)?;
    let root = config_root(config_path);

    let source = content_source(&config, &root, remote);
    tracing::info!("Rendering page from {}", source.describe());

    let page = render_standard_page(source, host_config(&config)).await?;

    let output = output.unwrap_or_else(|| root.join(&config.site.output).join("index.html"));
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, &page.html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if page.report.failed > 0 {
        tracing::warn!(
            "{} sections fell back to built-in copy",
            page.report.failed
        );
    }
    tracing::info!(
        "Rendered {} sections from content to {}",
        page.report.loaded,
        output.display()
    );

    Ok(())
}
