//! Site configuration (site.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tetrad_sections::FORM_RELAY_ENDPOINT;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Local directory with the JSON content documents
    #[serde(default = "default_contents")]
    pub contents: String,
    /// Base URL to fetch content from instead of the local directory
    #[serde(default)]
    pub remote: Option<String>,
    /// Directory with images and stylesheets
    #[serde(default = "default_assets")]
    pub assets: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Paths to CSS stylesheets to include
    pub styles: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            contents: default_contents(),
            remote: None,
            assets: default_assets(),
            output: default_output(),
            styles: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_relay_endpoint")]
    pub relay_endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: default_relay_endpoint(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_title() -> String {
    "Tetrad AI".to_string()
}
fn default_contents() -> String {
    "contents".to_string()
}
fn default_assets() -> String {
    "public".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_relay_endpoint() -> String {
    FORM_RELAY_ENDPOINT.to_string()
}
fn default_port() -> u16 {
    4000
}

/// Load configuration from `path` if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
