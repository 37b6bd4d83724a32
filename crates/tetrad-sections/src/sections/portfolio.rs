//! Project portfolio grouped by category.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="portfolio" id="portfolio">
  <div class="portfolio-container">
    <div class="portfolio-header">
      <h2 class="portfolio-title">{{ title }}</h2>
      <p class="portfolio-description">{{ description }}</p>
    </div>
    <div class="portfolio-grid">
      {% for category in categories %}
      <div class="portfolio-category">
        <div class="category-header">
          <div class="category-icon"><i class="{{ category.icon }}"></i></div>
          <h3 class="category-title">{{ category.title }}</h3>
        </div>
        <div class="projects-list">
          {% for project in category.projects %}
          <div class="project-card">
            <div class="project-header">
              <h4 class="project-name">{{ project.name }}</h4>
              <p class="project-tagline">{{ project.tagline }}</p>
            </div>
            <div class="project-content">
              <p class="project-description">{{ project.description }}</p>
              <div class="project-technologies">
                <div class="tech-label">Technologies:</div>
                <div class="tech-tags">
                  {% for tech in project.technologies %}
                  <span class="tech-tag">{{ tech }}</span>
                  {% endfor %}
                </div>
              </div>
            </div>
            <div class="project-overlay">
              <div class="overlay-content">
                <i class="fas fa-eye"></i>
                <span>View Details</span>
              </div>
            </div>
          </div>
          {% endfor %}
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct PortfolioView {
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Category {
    pub icon: String,
    pub title: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Project {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl Category {
    fn from_model(category: &ContentModel) -> Self {
        Self {
            icon: category.raw("icon"),
            title: category.raw("title"),
            projects: category
                .list("projects")
                .iter()
                .map(|project| Project {
                    name: project.raw("name"),
                    tagline: project.raw("tagline"),
                    description: project.raw("description"),
                    technologies: project.strings("technologies"),
                })
                .collect(),
        }
    }
}

impl PortfolioView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            title: model.text_or("title", "Our Portfolio"),
            description: model.text_or(
                "description",
                "Showcasing our expertise through innovative solutions and transformative projects.",
            ),
            categories: model
                .list("categories")
                .iter()
                .map(Category::from_model)
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PortfolioSection;

impl PortfolioSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for PortfolioSection {
    fn tag(&self) -> &'static str {
        "portfolio-section"
    }

    fn label(&self) -> &'static str {
        "portfolio"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/portfolio.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("portfolio.html", &PortfolioView::from_model(state.model()))
    }
}
