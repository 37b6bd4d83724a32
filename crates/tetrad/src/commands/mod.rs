//! CLI subcommands.

pub mod init;
pub mod mailto;
pub mod render;
pub mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tetrad_content::{ContentSource, FsSource, HttpSource};
use tetrad_host::HostConfig;
use tetrad_sections::RenderContext;

use crate::config::ConfigFile;

/// Pick the content source: an explicit remote, the configured remote, or
/// the local content directory. Relative paths resolve against `root`.
pub fn content_source(
    config: &ConfigFile,
    root: &Path,
    remote: Option<String>,
) -> Arc<dyn ContentSource> {
    match remote.or_else(|| config.site.remote.clone().filter(|r| !r.is_empty())) {
        Some(url) => Arc::new(HttpSource::new(url)),
        None => Arc::new(FsSource::new(root.join(&config.site.contents))),
    }
}

/// Page settings for the host renderer.
pub fn host_config(config: &ConfigFile) -> HostConfig {
    HostConfig {
        title: config.site.title.clone(),
        styles: config
            .site
            .styles
            .clone()
            .unwrap_or_else(|| HostConfig::default().styles),
        scripts: vec![],
        render: RenderContext {
            relay_endpoint: config.contact.relay_endpoint.clone(),
            ..Default::default()
        },
    }
}

/// Directory the config file lives in; paths in it are relative to this.
pub fn config_root(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
