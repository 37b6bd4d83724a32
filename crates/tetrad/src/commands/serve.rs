//! Preview server command.

use std::path::Path;

use anyhow::Result;
use tetrad_server::{PreviewConfig, PreviewServer};

use crate::commands::{config_root, host_config};
use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let root = config_root(config_path);

    if config.site.remote.as_deref().is_some_and(|r| !r.is_empty()) {
        tracing::warn!("Preview always reads the local content directory; ignoring remote");
    }

    let contents_dir = root.join(&config.site.contents);
    if !contents_dir.exists() {
        anyhow::bail!(
            "Content directory not found: {}. Run 'tetrad init' first.",
            contents_dir.display()
        );
    }

    let port = port.unwrap_or(config.server.port);
    tracing::info!("Starting preview server on port {}", port);

    let preview = PreviewConfig {
        contents_dir,
        assets_dir: root.join(&config.site.assets),
        port,
        open,
        page: host_config(&config),
        ..Default::default()
    };

    PreviewServer::new(preview).start().await?;

    Ok(())
}
