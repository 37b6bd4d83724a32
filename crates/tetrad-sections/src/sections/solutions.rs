//! Service offerings grid.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="solutions" id="solutions">
  <div class="solutions-container">
    <div class="solutions-header">
      <h2 class="solutions-title">{{ title }}</h2>
      <p class="solutions-description">{{ description }}</p>
    </div>
    <div class="solutions-grid">
      {% for solution in solutions %}
      <div class="solution-card">
        <div class="solution-icon"><i class="{{ solution.icon }}"></i></div>
        <div class="solution-content">
          <h3 class="solution-title">{{ solution.title }}</h3>
          <p class="solution-subtitle">{{ solution.subtitle }}</p>
          <div class="solution-services">
            <h4>Services:</h4>
            <ul class="services-list">
              {% for service in solution.services %}
              <li><strong>{{ service.name }}</strong> - {{ service.description }}</li>
              {% endfor %}
            </ul>
          </div>
          <div class="solution-technologies">
            <h4>Technologies:</h4>
            <div class="tech-tags">
              {% for tech in solution.technologies %}
              <span class="tech-tag">{{ tech }}</span>
              {% endfor %}
            </div>
          </div>
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct SolutionsView {
    pub title: String,
    pub description: String,
    pub solutions: Vec<SolutionCard>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct SolutionCard {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub services: Vec<Service>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Service {
    pub name: String,
    pub description: String,
}

impl SolutionCard {
    fn from_model(solution: &ContentModel) -> Self {
        Self {
            icon: solution.raw("icon"),
            title: solution.raw("title"),
            subtitle: solution.raw("subtitle"),
            services: solution
                .list("services")
                .iter()
                .map(|service| Service {
                    name: service.raw("name"),
                    description: service.raw("description"),
                })
                .collect(),
            technologies: solution.strings("technologies"),
        }
    }
}

impl SolutionsView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            title: model.text_or("title", "Our Solutions"),
            description: model.text_or(
                "description",
                "Transform your data landscape with our comprehensive suite of AI-powered solutions.",
            ),
            solutions: model
                .list("solutions")
                .iter()
                .map(SolutionCard::from_model)
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SolutionsSection;

impl SolutionsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for SolutionsSection {
    fn tag(&self) -> &'static str {
        "solutions-section"
    }

    fn label(&self) -> &'static str {
        "solutions"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/solutions.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("solutions.html", &SolutionsView::from_model(state.model()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_services_and_technologies() {
        let model = ContentModel::new(json!({
            "solutions": [{
                "icon": "fas fa-brain",
                "title": "Artificial Intelligence",
                "subtitle": "Models that ship",
                "services": [{"name": "LLM apps", "description": "Assistants and agents"}],
                "technologies": ["Python", "PyTorch"]
            }]
        }));

        let html = SolutionsSection::new()
            .render(&ContentState::Loaded(model), &RenderContext::default())
            .unwrap();

        assert!(html.contains("<strong>LLM apps</strong> - Assistants and agents"));
        assert!(html.contains(r#"<span class="tech-tag">PyTorch</span>"#));
        assert!(html.contains("Our Solutions"));
    }

    #[test]
    fn nested_lists_may_be_missing() {
        let model = ContentModel::new(json!({"solutions": [{"title": "Data Engineering"}]}));

        let view = SolutionsView::from_model(&model);

        assert_eq!(view.solutions[0].services, vec![]);
        assert!(view.solutions[0].technologies.is_empty());
    }

    #[test]
    fn empty_document_renders_no_cards() {
        let html = SolutionsSection::new()
            .render(
                &ContentState::Loaded(ContentModel::new(json!({}))),
                &RenderContext::default(),
            )
            .unwrap();

        assert!(!html.contains("solution-card"));
    }
}
