//! Preview server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::{broadcast, RwLock};
use tower_http::services::ServeDir;

use tetrad_content::FsSource;
use tetrad_host::{Host, HostConfig, HostError, HydrationReport, RenderEvent};
use tetrad_sections::StandardPage;

use crate::reload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{ContentChange, ContentWatcher};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Directory holding the JSON content documents
    pub contents_dir: PathBuf,

    /// Directory with static assets (images, css)
    pub assets_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Page settings passed to the host renderer
    pub page: HostConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            contents_dir: PathBuf::from("contents"),
            assets_dir: PathBuf::from("public"),
            port: 4000,
            host: "127.0.0.1".to_string(),
            open: true,
            page: HostConfig::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Render error: {0}")]
    RenderError(#[from] HostError),
}

/// Shared server state.
struct ServerState {
    config: PreviewConfig,
    page: RwLock<String>,
    reload: ReloadHub,
}

/// Serves the landing page and its content documents, re-rendering when
/// content files change.
pub struct PreviewServer {
    config: PreviewConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Build the router and initial page without binding a socket.
    async fn prepare(config: PreviewConfig) -> Result<(Router, Arc<ServerState>), ServerError> {
        let page = render(&config).await?;

        let state = Arc::new(ServerState {
            page: RwLock::new(page),
            reload: ReloadHub::new(),
            config,
        });

        let app = Router::new()
            .route("/", get(page_handler))
            .route("/index.html", get(page_handler))
            .route(RELOAD_PATH, get(ws_handler))
            .nest_service("/contents", ServeDir::new(&state.config.contents_dir))
            .fallback_service(ServeDir::new(&state.config.assets_dir))
            .with_state(Arc::clone(&state));

        Ok((app, state))
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let (watcher, mut rx) = ContentWatcher::new(&self.config.contents_dir)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let open = self.config.open;
        let (app, state) = Self::prepare(self.config).await?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(change) = rx.recv().await {
                handle_content_change(&state_clone, change, &mut rx).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        tracing::info!("Previewing at http://{}", addr);

        if open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Render a fresh page. Every render mounts new section instances, so each
/// content document is fetched once per render.
async fn render(config: &PreviewConfig) -> Result<String, HostError> {
    let mut page = config.page.clone();
    page.scripts.push(reload_client_script(RELOAD_PATH));

    let source = Arc::new(FsSource::new(&config.contents_dir));
    let mut host = Host::new(source, page);
    let mut events = host.subscribe();

    host.mount_all(StandardPage::new().sections)?;
    host.settle().await?;
    let html = host.render_page()?;

    log_render_events(&mut events);
    Ok(html)
}

/// Log what a render did and return its settle summary.
fn log_render_events(events: &mut broadcast::Receiver<RenderEvent>) -> Option<HydrationReport> {
    let mut settled = None;

    loop {
        match events.try_recv() {
            Ok(RenderEvent::Region { tag, .. }) => tracing::debug!("Hydrated {}", tag),
            Ok(RenderEvent::Settled { loaded, failed }) => {
                tracing::info!(
                    "Rendered page: {} sections loaded, {} on fallback",
                    loaded,
                    failed
                );
                settled = Some(HydrationReport { loaded, failed });
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                tracing::debug!("Skipped {} render events", n);
            }
            Err(_) => break,
        }
    }

    settled
}

/// Re-render after content edits settle, then tell open tabs to reload.
async fn handle_content_change(
    state: &Arc<ServerState>,
    change: ContentChange,
    rx: &mut tokio::sync::mpsc::Receiver<ContentChange>,
) {
    match &change {
        ContentChange::Updated(path) => tracing::info!("Content updated: {}", path.display()),
        ContentChange::Removed(path) => tracing::info!("Content removed: {}", path.display()),
    }

    // Let the editor finish writing, then fold in anything queued meanwhile.
    tokio::time::sleep(Duration::from_millis(100)).await;
    while rx.try_recv().is_ok() {}

    match render(&state.config).await {
        Ok(html) => {
            *state.page.write().await = html;
            state.reload.send(ReloadMessage::Reload);
        }
        Err(e) => tracing::warn!("Failed to re-render page: {}", e),
    }
}

/// Handler for the landing page.
async fn page_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Html(state.page.read().await.clone())
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one tab.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.reload.subscribe();

    if send(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode reload message: {}", e);
            return Ok(());
        }
    };
    socket.send(Message::Text(json.into())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config(contents: PathBuf, assets: PathBuf) -> PreviewConfig {
        PreviewConfig {
            contents_dir: contents,
            assets_dir: assets,
            open: false,
            ..Default::default()
        }
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = PreviewServer::new(PreviewConfig::default());

        assert_eq!(server.config.port, 4000);
        assert_eq!(server.config.contents_dir, PathBuf::from("contents"));
    }

    #[tokio::test]
    async fn renders_page_with_reload_script() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blog.json"), r#"{"title":"Field Notes"}"#).unwrap();

        let html = render(&config(temp.path().to_path_buf(), temp.path().join("public")))
            .await
            .unwrap();

        assert!(html.contains("Field Notes"));
        assert!(html.contains("__reload"));
    }

    #[tokio::test]
    async fn render_events_report_settled_counts() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("team.json"), r#"{"title":"Crew"}"#).unwrap();
        fs::write(temp.path().join("footer.json"), "{").unwrap();

        let mut host = Host::new(Arc::new(FsSource::new(temp.path())), HostConfig::default());
        let mut events = host.subscribe();
        host.mount_all(StandardPage::new().sections).unwrap();
        host.settle().await.unwrap();

        let report = log_render_events(&mut events).unwrap();

        assert_eq!(report, HydrationReport { loaded: 1, failed: 7 });
        assert!(log_render_events(&mut events).is_none());
    }

    #[tokio::test]
    async fn content_change_rerenders_and_signals_reload() {
        let temp = tempdir().unwrap();
        let hero = temp.path().join("hero.json");
        fs::write(&hero, r#"{"tagline":"Before"}"#).unwrap();

        let (_app, state) = PreviewServer::prepare(config(
            temp.path().to_path_buf(),
            temp.path().join("public"),
        ))
        .await
        .unwrap();
        assert!(state.page.read().await.contains("Before"));

        let mut reloads = state.reload.subscribe();
        let (_tx, mut rx) = tokio::sync::mpsc::channel(1);
        fs::write(&hero, r#"{"tagline":"After"}"#).unwrap();

        handle_content_change(&state, ContentChange::Updated(hero), &mut rx).await;

        assert!(state.page.read().await.contains("After"));
        assert_eq!(reloads.try_recv().unwrap(), ReloadMessage::Reload);
    }
}
