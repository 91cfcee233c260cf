//! Configuration module

mod site;

pub use site::ContentConfig;
pub use site::MarkdownConfig;
pub use site::PaginationConfig;
pub use site::ReadingConfig;
pub use site::SiteConfig;
pub use site::{SiteLink, SocialLink};
