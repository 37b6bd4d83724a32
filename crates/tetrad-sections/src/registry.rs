//! Section registry and the standard page layout.
//!
//! Sections are looked up by tag name and instantiated on demand. Nothing is
//! registered globally; callers own the registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::sections::{
    BlogSection, ContactSection, CultureSection, FooterSection, HeroSection, Navbar,
    PortfolioSection, SolutionsSection, TeamSection,
};
use crate::traits::Section;

/// Builds a fresh section instance.
pub type SectionFactory = fn() -> Arc<dyn Section>;

/// A registry of section constructors, keyed by tag name.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    factories: HashMap<String, SectionFactory>,

    /// Tags in registration order, which is page order
    order: Vec<String>,
}

impl SectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every standard section in page order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [(&str, SectionFactory); 9] = [
            ("nav-bar", || Arc::new(Navbar::new())),
            ("hero-section", || Arc::new(HeroSection::new())),
            ("solutions-section", || Arc::new(SolutionsSection::new())),
            ("team-section", || Arc::new(TeamSection::new())),
            ("portfolio-section", || Arc::new(PortfolioSection::new())),
            ("culture-section", || Arc::new(CultureSection::new())),
            ("blog-section", || Arc::new(BlogSection::new())),
            ("contact-section", || Arc::new(ContactSection::new())),
            ("footer-section", || Arc::new(FooterSection::new())),
        ];

        for (tag, factory) in defaults {
            // Tags above are distinct.
            let _ = registry.register(tag, factory);
        }
        registry
    }

    /// Register a section constructor under `tag`.
    pub fn register(&mut self, tag: &str, factory: SectionFactory) -> Result<(), RegistryError> {
        let key = tag.to_lowercase();
        if self.factories.contains_key(&key) {
            return Err(RegistryError::DuplicateTag(tag.to_string()));
        }
        self.factories.insert(key.clone(), factory);
        self.order.push(key);
        Ok(())
    }

    /// Check if a tag is registered (case-insensitive).
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(&tag.to_lowercase())
    }

    /// Registered tags in page order.
    pub fn tags(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Build a new instance of the section registered under `tag`.
    pub fn instantiate(&self, tag: &str) -> Result<Arc<dyn Section>, RegistryError> {
        self.factories
            .get(&tag.to_lowercase())
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))
    }

    /// Build one instance of every registered section, in page order.
    pub fn instantiate_all(&self) -> Vec<Arc<dyn Section>> {
        self.order
            .iter()
            .filter_map(|tag| self.factories.get(tag))
            .map(|factory| factory())
            .collect()
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Section already registered: {0}")]
    DuplicateTag(String),

    #[error("Unknown section: {0}")]
    UnknownTag(String),
}

/// The standard landing page, with typed handles to the interactive sections.
pub struct StandardPage {
    pub navbar: Arc<Navbar>,
    pub contact: Arc<ContactSection>,
    pub footer: Arc<FooterSection>,

    /// Every section in page order, including the three above
    pub sections: Vec<Arc<dyn Section>>,
}

impl StandardPage {
    /// Create fresh instances of all nine sections, in registry order.
    pub fn new() -> Self {
        Self::from_registry(&SectionRegistry::with_defaults())
    }

    /// Instantiate every section in `registry`, keeping typed handles to the
    /// interactive ones. Tags the registry does not know are skipped.
    pub fn from_registry(registry: &SectionRegistry) -> Self {
        let navbar = Arc::new(Navbar::new());
        let contact = Arc::new(ContactSection::new());
        let footer = Arc::new(FooterSection::new());

        let sections = registry
            .tags()
            .into_iter()
            .filter_map(|tag| {
                let section: Arc<dyn Section> = if tag == navbar.tag() {
                    navbar.clone()
                } else if tag == contact.tag() {
                    contact.clone()
                } else if tag == footer.tag() {
                    footer.clone()
                } else {
                    registry.instantiate(tag).ok()?
                };
                Some(section)
            })
            .collect();

        Self {
            navbar,
            contact,
            footer,
            sections,
        }
    }
}

impl Default for StandardPage {
    fn default() -> Self {
        Self::new()
    }
}
