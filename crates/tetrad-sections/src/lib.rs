//! Page sections for the Tetrad site.
//!
//! Each section renders its slice of the landing page from a content document,
//! falling back to built-in copy for anything the document leaves out. The
//! contact section also composes `mailto:` links from its form.

pub mod form;
pub mod navigator;
pub mod registry;
pub mod sections;
pub mod templates;
pub mod traits;

pub use form::{
    encode_component, ContactFormState, FormField, MailtoLink, UnknownField, DEFAULT_RECIPIENT,
    FORM_RELAY_ENDPOINT,
};
pub use navigator::{Navigator, SystemNavigator};
pub use registry::{RegistryError, SectionFactory, SectionRegistry, StandardPage};
pub use sections::{
    BlogSection, ContactSection, CultureSection, FooterSection, HeroSection, Navbar,
    PortfolioSection, SolutionsSection, TeamSection,
};
pub use traits::{Invalidator, RenderContext, RenderError, Section};
