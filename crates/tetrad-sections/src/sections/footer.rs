//! Page footer with link groups and back-to-top control.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::navigator::Navigator;
use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<footer class="footer">
  <div class="footer-container">
    <div class="footer-content">
      <div class="footer-brand">
        <div class="brand-logo">
          <img src="/images/logo.png" alt="Tetrad AI" class="footer-logo" />
        </div>
        <p class="brand-tagline">Four Dimensions of Data Excellence</p>
        <p class="brand-description">{{ description }}</p>
      </div>
      <div class="footer-links">
        {% for group in groups %}
        <div class="link-group">
          <h4 class="link-group-title">{{ group.title }}</h4>
          <ul class="link-list">
            {% for link in group.links %}
            <li><a href="{{ link.href }}" class="footer-link">{{ link.title }}</a></li>
            {% endfor %}
          </ul>
        </div>
        {% endfor %}
      </div>
    </div>
    <div class="footer-bottom">
      <div class="footer-bottom-content">
        <p class="copyright">© {{ year }} Tetrad AI. All rights reserved.</p>
        <div class="footer-actions">
          <button class="back-to-top">
            <i class="fas fa-rocket"></i>
            <span>Back to Top</span>
          </button>
        </div>
      </div>
    </div>
  </div>
</footer>
"##;

#[derive(Debug, Serialize)]
struct FooterLink {
    title: &'static str,
    href: &'static str,
}

#[derive(Debug, Serialize)]
struct LinkGroup {
    title: &'static str,
    links: Vec<FooterLink>,
}

const GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "Solutions",
        &[
            ("Artificial Intelligence", "#solutions"),
            ("Web Development", "#solutions"),
            ("Data Engineering", "#solutions"),
            ("Data Analytics", "#solutions"),
            ("Power BI Consulting", "#solutions"),
        ],
    ),
    (
        "Company",
        &[
            ("Our Team", "#team"),
            ("Portfolio", "#portfolio"),
            ("Culture", "#culture"),
            ("Blog", "#blog"),
        ],
    ),
    (
        "Connect",
        &[
            ("Email Us", "mailto:hello@tetradai.com"),
            ("Contact", "#contact"),
            ("LinkedIn", "#"),
            ("GitHub", "#"),
        ],
    ),
];

#[derive(Debug, Serialize)]
struct FooterView {
    description: String,
    year: i32,
    groups: Vec<LinkGroup>,
}

impl FooterView {
    fn new(model: &ContentModel, ctx: &RenderContext) -> Self {
        Self {
            description: model.text_or(
                "description",
                "Transforming businesses through cutting-edge AI solutions and data engineering excellence.",
            ),
            year: ctx.year,
            groups: GROUPS
                .iter()
                .map(|&(title, links)| LinkGroup {
                    title,
                    links: links
                        .iter()
                        .map(|&(title, href)| FooterLink { title, href })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FooterSection;

impl FooterSection {
    pub fn new() -> Self {
        Self
    }

    /// Scroll the page back to the top.
    pub fn back_to_top(&self, navigator: &dyn Navigator) {
        if let Err(e) = navigator.scroll_to_top() {
            tracing::warn!("Failed to scroll to top: {}", e);
        }
    }
}

impl Section for FooterSection {
    fn tag(&self) -> &'static str {
        "footer-section"
    }

    fn label(&self) -> &'static str {
        "footer"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/footer.json")
    }

    fn render(&self, state: &ContentState, ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("footer.html", &FooterView::new(state.model(), ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::testing::RecordingNavigator;
    use serde_json::json;

    fn ctx() -> RenderContext {
        RenderContext {
            year: 2031,
            ..Default::default()
        }
    }

    #[test]
    fn copyright_uses_render_year() {
        let html = FooterSection::new().render(&ContentState::Empty, &ctx()).unwrap();

        assert!(html.contains("© 2031 Tetrad AI. All rights reserved."));
        assert!(html.contains("Power BI Consulting"));
    }

    #[test]
    fn description_falls_back_when_falsy() {
        let state = ContentState::Loaded(ContentModel::new(json!({"description": null})));

        let html = FooterSection::new().render(&state, &ctx()).unwrap();

        assert!(html.contains("Transforming businesses through cutting-edge AI solutions"));
    }

    #[test]
    fn back_to_top_scrolls() {
        let navigator = RecordingNavigator::default();

        FooterSection::new().back_to_top(&navigator);

        assert_eq!(*navigator.scrolls.lock().unwrap(), 1);
    }
}
