//! Hero banner with logo, tagline and optional call to action.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="hero">
  <div class="hero-background">
    <img src="/images/hero.jpg" alt="Tetrad AI Background" class="hero-bg-image" />
    <div class="hero-overlay"></div>
  </div>
  <div class="hero-container">
    <div class="hero-content">
      <div class="hero-logo">
        <img src="{{ logo }}" alt="Tetrad AI" class="hero-logo-image" />
      </div>
      <h2 class="hero-tagline">{{ tagline }}</h2>
      <p class="hero-description">{{ description }}</p>
      {% if cta %}
      <a href="{{ cta.link }}" class="hero-cta">{{ cta.text }} <i class="fas fa-rocket"></i></a>
      {% endif %}
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct HeroView {
    pub logo: String,
    pub tagline: String,
    pub description: String,
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CallToAction {
    pub text: String,
    pub link: String,
}

impl HeroView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            logo: model.text_or("logo", "/images/logo.png"),
            tagline: model.text_or("tagline", "Four Dimensions of Data Excellence"),
            description: model.text_or(
                "description",
                "Transforming businesses through cutting-edge AI solutions and data engineering excellence.",
            ),
            cta: model.text("cta_text").map(|text| CallToAction {
                text,
                link: model.text_or("cta_link", "#solutions"),
            }),
        }
    }
}

/// Top-of-page banner.
#[derive(Debug, Default)]
pub struct HeroSection;

impl HeroSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for HeroSection {
    fn tag(&self) -> &'static str {
        "hero-section"
    }

    fn label(&self) -> &'static str {
        "hero"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/hero.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("hero.html", &HeroView::from_model(state.model()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_state_uses_fallbacks() {
        let view = HeroView::from_model(ContentState::Empty.model());

        assert_eq!(
            view,
            HeroView {
                logo: "/images/logo.png".to_string(),
                tagline: "Four Dimensions of Data Excellence".to_string(),
                description: "Transforming businesses through cutting-edge AI solutions and data engineering excellence.".to_string(),
                cta: None,
            }
        );
    }

    #[test]
    fn cta_requires_text_and_defaults_link() {
        let model = ContentModel::new(json!({"cta_text": "Explore"}));

        let view = HeroView::from_model(&model);

        assert_eq!(
            view.cta,
            Some(CallToAction {
                text: "Explore".to_string(),
                link: "#solutions".to_string(),
            })
        );
    }

    #[test]
    fn empty_cta_text_hides_button() {
        let model = ContentModel::new(json!({"cta_text": "", "cta_link": "#team"}));

        let html = HeroSection::new()
            .render(&ContentState::Loaded(model), &RenderContext::default())
            .unwrap();

        assert!(!html.contains("hero-cta"));
    }

    #[test]
    fn renders_loaded_tagline() {
        let model = ContentModel::new(json!({"tagline": "Data in four dimensions", "cta_text": "Go", "cta_link": "#contact"}));

        let html = HeroSection::new()
            .render(&ContentState::Loaded(model), &RenderContext::default())
            .unwrap();

        assert!(html.contains("Data in four dimensions"));
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains("Go <i class=\"fas fa-rocket\"></i>"));
    }
}
