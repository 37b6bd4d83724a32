//! Contact form state and the mail link it composes.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tetrad_content::ContentModel;

/// Address used when the contact content does not name one.
pub const DEFAULT_RECIPIENT: &str = "hello@tetradai.com";

/// POST target the form falls back to when submission is not intercepted.
pub const FORM_RELAY_ENDPOINT: &str = "https://formspree.io/f/mqalbbek";

/// Characters `encodeURIComponent` leaves as-is, besides ASCII alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// A contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    /// The `name` attribute shared by the scripted and POST submission paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A field name the contact form does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Snapshot of the contact form inputs.
///
/// Snapshots are never mutated; [`ContactFormState::with_field`] returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    /// A copy of this snapshot with one field replaced.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Company => next.company = value,
            FormField::Message => next.message = value,
        }
        next
    }

    /// Compose the mail link for this form, addressed from `content`.
    pub fn compose(&self, content: &ContentModel) -> MailtoLink {
        let recipient = content.text_or("email", DEFAULT_RECIPIENT);
        let company = if self.company.is_empty() {
            "N/A"
        } else {
            self.company.as_str()
        };

        let subject = format!("Contact Inquiry from {}", self.name);
        let body = format!(
            "You have a new message from your website contact form:\n\
             ---\n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             \n\
             Message:\n\
             {}\n\
             ---\n",
            self.name, self.email, company, self.message
        );

        MailtoLink {
            recipient,
            subject,
            body,
        }
    }
}

/// A pre-addressed, pre-filled mail draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    /// Destination address
    pub recipient: String,

    /// Subject line, unencoded
    pub subject: String,

    /// Message body, unencoded
    pub body: String,
}

impl MailtoLink {
    /// The `mailto:` URI with percent-encoded subject and body.
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ada() -> ContactFormState {
        ContactFormState::new()
            .with_field(FormField::Name, "Ada")
            .with_field(FormField::Email, "ada@x.com")
            .with_field(FormField::Company, "")
            .with_field(FormField::Message, "Hello")
    }

    #[test]
    fn composes_with_default_recipient() {
        let link = ada().compose(&ContentModel::default());

        assert_eq!(link.recipient, "hello@tetradai.com");
        assert!(link.subject.contains("Ada"));
        assert!(link.body.contains("Company: N/A"));

        let uri = link.uri();
        assert!(uri.starts_with("mailto:hello@tetradai.com?subject="));
        assert!(uri.contains("subject=Contact%20Inquiry%20from%20Ada&body="));
        assert!(uri.contains("Company%3A%20N%2FA"));
    }

    #[test]
    fn content_email_overrides_recipient() {
        let content = ContentModel::new(json!({"email": "sales@tetradai.com"}));

        let link = ada().compose(&content);

        assert_eq!(link.recipient, "sales@tetradai.com");
        assert!(link.uri().starts_with("mailto:sales@tetradai.com?"));
    }

    #[test]
    fn empty_content_email_falls_back() {
        let content = ContentModel::new(json!({"email": ""}));

        assert_eq!(ada().compose(&content).recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn body_lists_every_field() {
        let form = ada().with_field(FormField::Company, "Analytical Engines");

        let link = form.compose(&ContentModel::default());

        assert_eq!(
            link.body,
            "You have a new message from your website contact form:\n---\nName: Ada\nEmail: ada@x.com\nCompany: Analytical Engines\n\nMessage:\nHello\n---\n"
        );
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("a b\nc"), "a%20b%0Ac");
        assert_eq!(encode_component("!'()*-._~"), "!'()*-._~");
        assert_eq!(encode_component("a&b=c?d#e/f:g@h"), "a%26b%3Dc%3Fd%23e%2Ff%3Ag%40h");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn sequential_updates_keep_both_values() {
        let form = ContactFormState::new()
            .with_field(FormField::Name, "Grace")
            .with_field(FormField::Email, "grace@navy.mil");

        assert_eq!(form.get(FormField::Name), "Grace");
        assert_eq!(form.get(FormField::Email), "grace@navy.mil");
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let before = ContactFormState::new();
        let after = before.with_field(FormField::Message, "Hi");

        assert_eq!(before.message, "");
        assert_eq!(after.message, "Hi");
    }

    #[test]
    fn parses_field_names() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
        assert!("phone".parse::<FormField>().is_err());
    }
}
