//! Site navigation bar with a collapsible mobile menu.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tetrad_content::ContentState;

use crate::templates::render_template;
use crate::traits::{Invalidator, RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<nav class="navbar">
  <div class="nav-container">
    <div class="nav-logo">
      <img src="/images/logo.png" alt="Tetrad AI" class="logo" />
    </div>
    <div class="nav-menu{% if open %} active{% endif %}">
      {% for link in links %}
      <a href="#{{ link.anchor }}" class="nav-link">{{ link.title }}</a>
      {% endfor %}
    </div>
    <div class="hamburger{% if open %} active{% endif %}">
      <span class="bar"></span>
      <span class="bar"></span>
      <span class="bar"></span>
    </div>
  </div>
</nav>
"##;

/// In-page anchors the navbar links to.
const LINKS: &[(&str, &str)] = &[
    ("Solutions", "solutions"),
    ("Team", "team"),
    ("Portfolio", "portfolio"),
    ("Contact", "contact"),
];

#[derive(Debug, Serialize)]
struct NavLink {
    title: &'static str,
    anchor: &'static str,
}

#[derive(Debug, Serialize)]
struct NavbarView {
    open: bool,
    links: Vec<NavLink>,
}

/// Navigation bar. Has no content document; its only state is the menu toggle.
#[derive(Debug, Default)]
pub struct Navbar {
    open: AtomicBool,
    invalidate: Mutex<Option<Invalidator>>,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mobile menu is expanded.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&self) {
        self.open.fetch_xor(true, Ordering::SeqCst);
        self.changed();
    }

    /// Collapse the mobile menu, e.g. after a link is followed.
    pub fn close_menu(&self) {
        self.open.store(false, Ordering::SeqCst);
        self.changed();
    }

    fn changed(&self) {
        let guard = self.invalidate.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(invalidate) = guard.as_ref() {
            invalidate.invalidate();
        }
    }
}

impl Section for Navbar {
    fn tag(&self) -> &'static str {
        "nav-bar"
    }

    fn label(&self) -> &'static str {
        "navbar"
    }

    fn on_mount(&self, invalidate: Invalidator) {
        *self.invalidate.lock().unwrap_or_else(PoisonError::into_inner) = Some(invalidate);
    }

    fn on_unmount(&self) {
        self.invalidate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    fn render(&self, _state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        let view = NavbarView {
            open: self.is_open(),
            links: LINKS
                .iter()
                .map(|&(title, anchor)| NavLink { title, anchor })
                .collect(),
        };
        render_template("navbar.html", &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn render(navbar: &Navbar) -> String {
        navbar
            .render(&ContentState::Empty, &RenderContext::default())
            .unwrap()
    }

    #[test]
    fn menu_starts_closed() {
        let navbar = Navbar::new();

        let html = render(&navbar);

        assert!(html.contains(r#"<div class="nav-menu">"#));
        assert!(html.contains(r##"<a href="#team" class="nav-link">Team</a>"##));
    }

    #[test]
    fn toggle_and_close_flip_active_class() {
        let navbar = Navbar::new();

        navbar.toggle_menu();
        assert!(navbar.is_open());
        assert!(render(&navbar).contains(r#"<div class="nav-menu active">"#));
        assert!(render(&navbar).contains(r#"<div class="hamburger active">"#));

        navbar.toggle_menu();
        assert!(!navbar.is_open());

        navbar.toggle_menu();
        navbar.close_menu();
        assert!(!navbar.is_open());
    }

    #[test]
    fn state_changes_request_rerender_while_mounted() {
        let navbar = Navbar::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        navbar.on_mount(Invalidator::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        navbar.toggle_menu();
        navbar.close_menu();
        navbar.on_unmount();
        navbar.toggle_menu();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
