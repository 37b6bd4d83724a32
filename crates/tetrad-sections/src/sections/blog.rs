//! Blog teaser. The blog itself is not live yet.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="blog" id="blog">
  <div class="blog-container">
    <div class="blog-content">
      <h2 class="blog-title">{{ title }}</h2>
      <h3 class="blog-subtitle">{{ subtitle }}</h3>
      <p class="blog-description">{{ description }}</p>
      <p class="blog-stay-tuned">{{ stay_tuned }}</p>
      <div class="coming-soon-badge">
        <i class="fas fa-rocket"></i>
        <span>Coming Soon</span>
      </div>
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct BlogView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stay_tuned: String,
}

impl BlogView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            title: model.text_or("title", "Our Blog"),
            subtitle: model.text_or("subtitle", "Exploring the Data Cosmos"),
            description: model.text_or(
                "description",
                "Currently preparing stellar content for our community...",
            ),
            stay_tuned: model.text_or(
                "stayTuned",
                "Stay tuned for insights, tutorials, and thought leadership from the Tetrad AI team.",
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct BlogSection;

impl BlogSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for BlogSection {
    fn tag(&self) -> &'static str {
        "blog-section"
    }

    fn label(&self) -> &'static str {
        "blog"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/blog.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("blog.html", &BlogView::from_model(state.model()))
    }
}
