//! The fetch-then-apply routine shared by every section.

use crate::model::ContentModel;
use crate::source::ContentSource;

/// Why a section could not load its content. The section keeps rendering
/// fallback copy whichever variant occurs.
#[derive(Debug, thiserror::Error)]
pub enum HydrationError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch the document at `path` once and hand it to `apply`.
///
/// `apply` runs exactly once on success and never on failure. A failure is
/// logged once, naming the section, and returned so callers can count it.
pub async fn hydrate<F>(
    source: &dyn ContentSource,
    section: &str,
    path: &str,
    apply: F,
) -> Result<(), HydrationError>
where
    F: FnOnce(ContentModel),
{
    match load(source, path).await {
        Ok(model) => {
            tracing::debug!("Hydrated {} from {}", section, path);
            apply(model);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error loading {} data: {}", section, e);
            Err(e)
        }
    }
}

async fn load(source: &dyn ContentSource, path: &str) -> Result<ContentModel, HydrationError> {
    let bytes = source.fetch(path).await?;
    Ok(ContentModel::from_slice(&bytes)?)
}
