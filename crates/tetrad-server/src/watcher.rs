//! Watches the content directory for edits.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// A content file changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    /// A content document was created or modified
    Updated(PathBuf),

    /// A content document was removed
    Removed(PathBuf),
}

/// Watches content documents and reports changes.
pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
}

impl ContentWatcher {
    /// Watch `dir` recursively.
    ///
    /// Returns the watcher and a channel of changes. Events closer together
    /// than 100ms are coalesced.
    pub fn new(
        dir: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<ContentChange>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(32);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(dir, RecursiveMode::Recursive)
            .map_err(std::io::Error::other)?;

        std::thread::spawn(move || {
            let debounce = Duration::from_millis(100);
            let mut last: Option<Instant> = None;

            while let Ok(event) = sync_rx.recv() {
                let now = Instant::now();
                if last.is_some_and(|t| now.duration_since(t) < debounce) {
                    continue;
                }

                for path in &event.paths {
                    if let Some(change) = classify_event(path, &event.kind) {
                        last = Some(now);
                        if async_tx.blocking_send(change).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Only JSON documents matter; editor swap files and the like are ignored.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<ContentChange> {
    use notify::EventKind;

    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(ContentChange::Updated(path.to_path_buf()))
        }
        EventKind::Remove(_) => Some(ContentChange::Removed(path.to_path_buf())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_json_changes_only() {
        let json = Path::new("contents/hero.json");
        let swap = Path::new("contents/.hero.json.swp");

        assert_eq!(
            classify_event(json, &EventKind::Modify(ModifyKind::Any)),
            Some(ContentChange::Updated(json.to_path_buf()))
        );
        assert_eq!(
            classify_event(json, &EventKind::Remove(RemoveKind::File)),
            Some(ContentChange::Removed(json.to_path_buf()))
        );
        assert_eq!(classify_event(swap, &EventKind::Create(CreateKind::File)), None);
    }

    #[tokio::test]
    async fn watches_content_changes() {
        let temp = tempdir().unwrap();

        let (watcher, mut rx) = ContentWatcher::new(temp.path()).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(temp.path().join("team.json"), "{}").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for content change");
        assert!(event.unwrap().is_some(), "channel should not be closed");
    }
}
