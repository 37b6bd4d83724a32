//! The page sections.

pub mod blog;
pub mod contact;
pub mod culture;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod portfolio;
pub mod solutions;
pub mod team;

pub use blog::BlogSection;
pub use contact::ContactSection;
pub use culture::CultureSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use portfolio::PortfolioSection;
pub use solutions::SolutionsSection;
pub use team::TeamSection;
