//! Client navigation, the only way sections reach outside the page.

use std::io;

/// Hands links and scroll requests to the user agent.
pub trait Navigator: Send + Sync {
    /// Navigate to `uri` (e.g., a `mailto:` link).
    fn navigate(&self, uri: &str) -> io::Result<()>;

    /// Scroll the page back to the top.
    fn scroll_to_top(&self) -> io::Result<()>;
}

/// Opens links with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn navigate(&self, uri: &str) -> io::Result<()> {
        open::that(uri)
    }

    fn scroll_to_top(&self) -> io::Result<()> {
        tracing::debug!("No page to scroll outside a browser");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every request instead of acting on it.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub visited: Mutex<Vec<String>>,
        pub scrolls: Mutex<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, uri: &str) -> io::Result<()> {
            self.visited.lock().unwrap().push(uri.to_string());
            Ok(())
        }

        fn scroll_to_top(&self) -> io::Result<()> {
            *self.scrolls.lock().unwrap() += 1;
            Ok(())
        }
    }
}
