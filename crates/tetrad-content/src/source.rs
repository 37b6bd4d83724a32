//! Where content documents come from.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::hydrate::HydrationError;

/// A provider of raw content documents, addressed by site path
/// (e.g. `/contents/hero.json`).
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short description used in logs.
    fn describe(&self) -> String;

    /// Fetch the raw bytes of the document at `path`.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, HydrationError>;
}

/// Serves content files from a local directory.
///
/// `/contents/hero.json` resolves to `<root>/hero.json`; the leading
/// `/contents` segment is optional.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site path to a file under the root. Rejects paths that escape it.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, HydrationError> {
        let trimmed = path.trim_start_matches('/');
        let relative = trimmed.strip_prefix("contents/").unwrap_or(trimmed);

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(HydrationError::NotFound(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for FsSource {
    fn describe(&self) -> String {
        format!("dir {}", self.root.display())
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, HydrationError> {
        let file = self.resolve(path)?;

        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(HydrationError::NotFound(path.to_string()))
            }
            Err(e) => Err(HydrationError::Io {
                path: file.display().to_string(),
                source: e,
            }),
        }
    }
}

/// Fetches content over HTTP from the site's static file server.
///
/// No timeout or retry is configured; a request stays pending as long as the
/// server keeps it open.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `base_url` (e.g. `https://tetradai.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a source that reuses an existing client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Full URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, HydrationError> {
        let url = self.url_for(path);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HydrationError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn reads_files_under_root() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("hero.json"), r#"{"tagline":"Hi"}"#).unwrap();

        let source = FsSource::new(temp.path());

        let bytes = source.fetch("/contents/hero.json").await.unwrap();
        assert_eq!(bytes, br#"{"tagline":"Hi"}"#);

        let bytes = source.fetch("hero.json").await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp = tempdir().unwrap();
        let source = FsSource::new(temp.path());

        let result = source.fetch("/contents/team.json").await;

        assert!(matches!(result, Err(HydrationError::NotFound(_))));
    }

    #[test]
    fn rejects_paths_outside_root() {
        let source = FsSource::new("/srv/contents");

        assert!(source.resolve("/contents/../secrets.json").is_err());
        assert_eq!(
            source.resolve("/contents/blog.json").unwrap(),
            PathBuf::from("/srv/contents/blog.json")
        );
    }

    #[tokio::test]
    async fn fetches_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contents/blog.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"title":"News"}"#))
            .mount(&server)
            .await;

        let source = HttpSource::new(server.uri());
        let bytes = source.fetch("/contents/blog.json").await.unwrap();

        assert_eq!(bytes, br#"{"title":"News"}"#);
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contents/team.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(format!("{}/", server.uri()));
        let result = source.fetch("/contents/team.json").await;

        assert!(matches!(
            result,
            Err(HydrationError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn joins_base_url_and_path() {
        let source = HttpSource::new("https://tetradai.com/");

        assert_eq!(
            source.url_for("/contents/hero.json"),
            "https://tetradai.com/contents/hero.json"
        );
    }
}
