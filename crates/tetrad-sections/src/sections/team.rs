//! Team member cards.

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::templates::render_template;
use crate::traits::{RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="team" id="team">
  <div class="team-container">
    <div class="team-header">
      <h2 class="team-title">{{ title }}</h2>
      <p class="team-description">{{ description }}</p>
    </div>
    <div class="team-grid">
      {% for member in members %}
      <div class="team-card">
        <div class="member-avatar">
          <img src="{{ member.avatar }}" alt="{{ member.name }}" class="avatar-image" />
          <div class="avatar-overlay">
            <div class="avatar-glow"></div>
          </div>
        </div>
        <div class="member-info">
          <h3 class="member-name">{{ member.name }}</h3>
          <h4 class="member-position">{{ member.position }}</h4>
          <p class="member-specialization">{{ member.specialization }}</p>
          <p class="member-bio">{{ member.bio }}</p>
          <div class="member-linkedin">
            <a href="{{ member.linkedin }}" target="_blank" rel="noopener noreferrer" class="linkedin-link">
              <i class="fab fa-linkedin"></i>
              <span>Connect with {{ member.first_name }}</span>
            </a>
          </div>
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct TeamView {
    pub title: String,
    pub description: String,
    pub members: Vec<MemberCard>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct MemberCard {
    pub avatar: String,
    pub name: String,
    pub first_name: String,
    pub position: String,
    pub specialization: String,
    pub bio: String,
    pub linkedin: String,
}

impl MemberCard {
    fn from_model(member: &ContentModel) -> Self {
        let name = member.raw("name");
        let first_name = name.split(' ').next().unwrap_or_default().to_string();

        Self {
            avatar: member.text_or("avatar", "/images/team/default-avatar.jpg"),
            first_name,
            name,
            position: member.raw("position"),
            specialization: member.raw("specialization"),
            bio: member.raw("bio"),
            linkedin: member.raw("linkedin"),
        }
    }
}

impl TeamView {
    pub(crate) fn from_model(model: &ContentModel) -> Self {
        Self {
            title: model.text_or("title", "Who We Are"),
            description: model.text_or(
                "description",
                "Meet the expert team driving Tetrad AI's success.",
            ),
            members: model
                .list("members")
                .iter()
                .map(MemberCard::from_model)
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TeamSection;

impl TeamSection {
    pub fn new() -> Self {
        Self
    }
}

impl Section for TeamSection {
    fn tag(&self) -> &'static str {
        "team-section"
    }

    fn label(&self) -> &'static str {
        "team"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/team.json")
    }

    fn render(&self, state: &ContentState, _ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("team.html", &TeamView::from_model(state.model()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_members_render_no_cards() {
        let html = TeamSection::new()
            .render(&ContentState::Empty, &RenderContext::default())
            .unwrap();

        assert!(html.contains("Who We Are"));
        assert!(!html.contains("team-card"));
    }

    #[test]
    fn member_card_uses_first_name_and_avatar_fallback() {
        let model = ContentModel::new(json!({
            "members": [{
                "name": "Ada Lovelace",
                "position": "Chief Analyst",
                "linkedin": "https://linkedin.com/in/ada",
                "avatar": ""
            }]
        }));

        let view = TeamView::from_model(&model);
        let member = &view.members[0];

        assert_eq!(member.first_name, "Ada");
        assert_eq!(member.avatar, "/images/team/default-avatar.jpg");
        assert_eq!(member.bio, "");

        let html = TeamSection::new()
            .render(&ContentState::Loaded(model), &RenderContext::default())
            .unwrap();
        assert!(html.contains("Connect with Ada</span>"));
        assert!(html.contains("Chief Analyst"));
    }

    #[test]
    fn member_without_name_renders_empty_label() {
        let model = ContentModel::new(json!({"members": [{}]}));

        let view = TeamView::from_model(&model);

        assert_eq!(view.members.len(), 1);
        assert_eq!(view.members[0].first_name, "");
    }
}
