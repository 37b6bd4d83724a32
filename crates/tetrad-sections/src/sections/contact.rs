//! Contact section: direct email link and the enquiry form.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;
use tetrad_content::{ContentModel, ContentState};

use crate::form::{ContactFormState, FormField, MailtoLink, DEFAULT_RECIPIENT};
use crate::navigator::Navigator;
use crate::templates::render_template;
use crate::traits::{Invalidator, RenderContext, RenderError, Section};

pub(crate) const TEMPLATE: &str = r##"<section class="contact" id="contact">
  <div class="contact-container">
    <div class="contact-header">
      <h2 class="contact-title">{{ title }}</h2>
      <p class="contact-description">{{ description }}</p>
    </div>
    <div class="contact-content">
      <div class="contact-info">
        <div class="info-card">
          <div class="info-icon"><i class="fas fa-envelope"></i></div>
          <div class="info-details">
            <h4 class="info-label">Email Us Directly</h4>
            <a href="mailto:{{ email }}" class="info-value email-link">{{ email }}</a>
            <p class="info-description">We typically respond within 24 hours</p>
          </div>
        </div>
        <div class="contact-features">
          <h4 class="features-title">What to Expect</h4>
          <ul class="features-list">
            <li><i class="fas fa-check"></i> Free consultation call</li>
            <li><i class="fas fa-check"></i> Tailored solution proposal</li>
            <li><i class="fas fa-check"></i> No obligation assessment</li>
            <li><i class="fas fa-check"></i> Expert technical guidance</li>
          </ul>
        </div>
      </div>
      <div class="contact-form-section">
        <form class="contact-form" action="{{ action }}" method="POST">
          {% for field in fields %}
          <div class="form-group">
            <label for="{{ field.name }}" class="form-label">{{ field.label }}</label>
            {% if field.multiline %}
            <textarea id="{{ field.name }}" name="{{ field.name }}" class="form-textarea"{% if field.required %} required{% endif %} placeholder="{{ field.placeholder }}" rows="5"></textarea>
            {% else %}
            <input type="{{ field.input_type }}" id="{{ field.name }}" name="{{ field.name }}" class="form-input"{% if field.required %} required{% endif %} placeholder="{{ field.placeholder }}" />
            {% endif %}
          </div>
          {% endfor %}
          <button type="submit" class="form-submit">Send Message <i class="fas fa-paper-plane"></i></button>
        </form>
      </div>
    </div>
  </div>
</section>
"##;

#[derive(Debug, Serialize)]
struct FieldView {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
    multiline: bool,
}

fn field_view(field: FormField) -> FieldView {
    let name = field.as_str();
    match field {
        FormField::Name => FieldView {
            name,
            label: "Full Name *",
            input_type: "text",
            placeholder: "Your full name",
            required: true,
            multiline: false,
        },
        FormField::Email => FieldView {
            name,
            label: "Email Address *",
            input_type: "email",
            placeholder: "your.email@company.com",
            required: true,
            multiline: false,
        },
        FormField::Company => FieldView {
            name,
            label: "Company",
            input_type: "text",
            placeholder: "Your company name",
            required: false,
            multiline: false,
        },
        FormField::Message => FieldView {
            name,
            label: "Message *",
            input_type: "text",
            placeholder: "Tell us about your project, challenges, or questions...",
            required: true,
            multiline: true,
        },
    }
}

#[derive(Debug, Serialize)]
struct ContactView {
    title: String,
    description: String,
    email: String,
    action: String,
    fields: Vec<FieldView>,
}

impl ContactView {
    fn new(model: &ContentModel, ctx: &RenderContext) -> Self {
        Self {
            title: model.text_or("title", "Connect With Us"),
            description: model.text_or(
                "description",
                "Ready to transform your data universe? Let's discuss how Tetrad AI can propel your organization into the future of data-driven success.",
            ),
            email: model.text_or("email", DEFAULT_RECIPIENT),
            action: ctx.relay_endpoint.clone(),
            fields: FormField::ALL.into_iter().map(field_view).collect(),
        }
    }
}

/// Contact section. Owns the form's current snapshot.
#[derive(Debug, Default)]
pub struct ContactSection {
    form: RwLock<Arc<ContactFormState>>,
    invalidate: Mutex<Option<Invalidator>>,
}

impl ContactSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current form snapshot.
    pub fn form(&self) -> Arc<ContactFormState> {
        Arc::clone(&self.form.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace one field's value. Unknown field names are ignored.
    pub fn update_field(&self, name: &str, value: impl Into<String>) {
        let field = match name.parse::<FormField>() {
            Ok(field) => field,
            Err(e) => {
                tracing::debug!("{}", e);
                return;
            }
        };

        {
            let mut form = self.form.write().unwrap_or_else(PoisonError::into_inner);
            let next = form.with_field(field, value);
            *form = Arc::new(next);
        }

        let guard = self.invalidate.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(invalidate) = guard.as_ref() {
            invalidate.invalidate();
        }
    }

    /// Compose the mail link for the current snapshot.
    pub fn compose(&self, state: &ContentState) -> MailtoLink {
        self.form().compose(state.model())
    }

    /// Compose the mail link and hand it to the navigator.
    ///
    /// Delivery is up to the user's mail client; a navigator failure is only logged.
    pub fn submit(&self, state: &ContentState, navigator: &dyn Navigator) -> MailtoLink {
        let link = self.compose(state);
        if let Err(e) = navigator.navigate(&link.uri()) {
            tracing::warn!("Failed to open mail client: {}", e);
        }
        link
    }
}

impl Section for ContactSection {
    fn tag(&self) -> &'static str {
        "contact-section"
    }

    fn label(&self) -> &'static str {
        "contact"
    }

    fn source(&self) -> Option<&'static str> {
        Some("/contents/contact.json")
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

    fn render(&self, state: &ContentState, ctx: &RenderContext) -> Result<String, RenderError> {
        render_template("contact.html", &ContactView::new(state.model(), ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::testing::RecordingNavigator;
    use serde_json::json;

    fn fill(contact: &ContactSection) {
        contact.update_field("name", "Ada");
        contact.update_field("email", "ada@x.com");
        contact.update_field("company", "");
        contact.update_field("message", "Hello");
    }

    #[test]
    fn submit_navigates_to_default_recipient() {
        let contact = ContactSection::new();
        fill(&contact);
        let navigator = RecordingNavigator::default();

        let link = contact.submit(&ContentState::Empty, &navigator);

        let visited = navigator.visited.lock().unwrap();
        assert_eq!(visited.len(), 1);
        assert!(visited[0].starts_with("mailto:hello@tetradai.com?subject="));
        assert!(link.body.contains("Company: N/A"));
        assert!(link.subject.contains("Ada"));
    }

    #[test]
    fn loaded_email_overrides_recipient() {
        let contact = ContactSection::new();
        fill(&contact);
        let state = ContentState::Loaded(ContentModel::new(json!({"email": "sales@tetradai.com"})));

        let link = contact.compose(&state);

        assert_eq!(link.recipient, "sales@tetradai.com");
    }

    #[test]
    fn updates_to_different_fields_are_both_kept() {
        let contact = ContactSection::new();
        let before = contact.form();

        contact.update_field("name", "Ada");
        contact.update_field("email", "ada@x.com");
        contact.update_field("phone", "555");

        let form = contact.form();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@x.com");
        assert_eq!(before.name, "");
    }

    #[test]
    fn form_carries_the_same_field_names_as_the_composer() {
        let ctx = RenderContext {
            year: 2025,
            relay_endpoint: "https://relay.example/f/abc".to_string(),
        };

        let html = ContactSection::new().render(&ContentState::Empty, &ctx).unwrap();

        for field in FormField::ALL {
            assert!(html.contains(&format!(r#"name="{}""#, field.as_str())));
        }
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains("relay.example"));
        assert!(html.contains(r#"href="mailto:hello@tetradai.com""#));
    }
}
