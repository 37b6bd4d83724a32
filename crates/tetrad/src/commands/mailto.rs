//! Compose a contact-form mail link from the command line.

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tetrad_content::{hydrate, ContentModel, ContentSlot, ContentSource, ContentState};
use tetrad_sections::{ContactSection, FormField, Section, SystemNavigator};

use crate::commands::{config_root, content_source};
use crate::config::load_config;

/// Values typed into the contact form.
#[derive(Debug, Clone, Default)]
pub struct MailtoArgs {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    /// Recipient override; skips loading the contact document
    pub to: Option<String>,
    /// Hand the link to the system mail client
    pub open: bool,
}

/// Run the mailto command.
pub async fn run(config_path: &Path, args: MailtoArgs) -> Result<()> {
    let (section, state) = prepare(config_path, &args).await?;

    let link = if args.open {
        section.submit(&state, &SystemNavigator)
    } else {
        section.compose(&state)
    };

    println!("{}", link);
    Ok(())
}

/// Fill a contact section from `args` and resolve the content it composes against.
async fn prepare(config_path: &Path, args: &MailtoArgs) -> Result<(ContactSection, ContentState)> {
    let state = match &args.to {
        Some(to) => ContentState::Loaded(ContentModel::new(json!({ "email": to }))),
        None => {
            let config = load_config(config_path)?;
            let source = content_source(&config, &config_root(config_path), None);
            contact_content(source.as_ref()).await
        }
    };

    Ok((fill(args), state))
}

fn fill(args: &MailtoArgs) -> ContactSection {
    let section = ContactSection::new();
    section.update_field(FormField::Name.as_str(), args.name.as_str());
    section.update_field(FormField::Email.as_str(), args.email.as_str());
    section.update_field(
        FormField::Company.as_str(),
        args.company.clone().unwrap_or_default(),
    );
    section.update_field(FormField::Message.as_str(), args.message.as_str());
    section
}

/// Load the contact document, staying on the built-in recipient if it fails.
async fn contact_content(source: &dyn ContentSource) -> ContentState {
    let section = ContactSection::new();
    let slot = ContentSlot::new();

    if let Some(path) = section.source() {
        // Failures are logged by hydrate.
        let _ = hydrate(source, section.label(), path, |model| {
            slot.load(model);
        })
        .await;
    }

    slot.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn ada() -> MailtoArgs {
        MailtoArgs {
            name: "Ada".to_string(),
            email: "ada@x.io".to_string(),
            company: None,
            message: "Hi".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn uses_recipient_from_contact_document() {
        let temp = tempdir().unwrap();
        let contents = temp.path().join("contents");
        fs::create_dir_all(&contents).unwrap();
        fs::write(contents.join("contact.json"), r#"{"email":"sales@tetradai.com"}"#).unwrap();

        let (section, state) = prepare(&temp.path().join("site.toml"), &ada()).await.unwrap();
        let link = section.compose(&state);

        assert_eq!(link.recipient, "sales@tetradai.com");
        assert_eq!(link.subject, "Contact Inquiry from Ada");
        assert!(link.body.contains("Company: N/A"));
    }

    #[tokio::test]
    async fn missing_contact_document_keeps_default_recipient() {
        let temp = tempdir().unwrap();

        let (section, state) = prepare(&temp.path().join("site.toml"), &ada()).await.unwrap();

        assert!(!state.is_loaded());
        assert_eq!(section.compose(&state).recipient, "hello@tetradai.com");
    }

    #[tokio::test]
    async fn explicit_recipient_wins() {
        let temp = tempdir().unwrap();
        let args = MailtoArgs {
            to: Some("ops@tetradai.com".to_string()),
            company: Some("Analytical Engines".to_string()),
            ..ada()
        };

        let (section, state) = prepare(&temp.path().join("site.toml"), &args).await.unwrap();
        let link = section.compose(&state);

        assert_eq!(link.recipient, "ops@tetradai.com");
        assert!(link.uri().starts_with("mailto:ops@tetradai.com?subject=Contact%20Inquiry%20from%20Ada"));
        assert!(link.body.contains("Company: Analytical Engines"));
    }
}
