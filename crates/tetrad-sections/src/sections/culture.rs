//! Company culture: team photo and value cards.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="culture" id="culture">
  <div class="culture-container">
    <div class="section-header">
      <h2 class="culture-title">{{ title }}</h2>
      <h3 class="culture-subtitle">{{ subtitle }}</h3>
      <p class="culture-description">{{ description }}</p>
    </div>
    <div class="culture-content">
      <div class="team-showcase">
        <div class="team-image-container">
          <img src="{{ team_photo }}" alt="Tetrad AI Team" class="team-image" />
          <div class="image-border"></div>
        </div>
        <div class="team-info">
          <h4 class="team-heading">The Tetrad Constellation</h4>
          <p class="team-text">Four dimensions of expertise working in perfect harmony to deliver exceptional AI and data solutions.</p>
        </div>
      </div>
      <div class="values-section">
        <div class="values-grid">
          {% for value in values %}
          <div class="value-item">
            <div class="value-header">
              <div class="value-icon"><i class="{{ value.icon }}"></i></div>
              <h5 class="value-name">{{ value.title }}</h5>
            </div>
            <p class="value-text">{{ value.description }}</p>
          </div>
          {% endfor %}
        </div>
      </div>
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CultureView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub team_photo: String,
    pub values: Vec<ValueCard>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ValueCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl CultureView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            title: model.text_or("title", "Tetrad Family Culture"),
            subtitle: model.text_or("subtitle", "Our Constellation of Values"),
            description: model.text_or(
                "description",
                "At Tetrad AI, we believe in the power of collaboration, innovation, and continuous learning.",
            ),
            team_photo: model.text_or("teamPhoto", "/images/team/team.jpg"),
            values: model
                .list("values")
                .iter()
                .map(|value| ValueCard {
                    icon: value.raw("icon"),
                    title: value.raw("title"),
                    description: value.raw("description"),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CultureSection;

impl CultureSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for CultureSection {
    fn tag(&self) -> &'static str {
        "culture-section"
    }

    fn label(&self) -> &'static str {
        "culture"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/culture.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("culture.html", &CultureView::from_model(state.model()))
    }
}
