//! Content module - handles posts, pages, and content processing

pub mod date;
mod frontmatter;
mod index;
pub mod loader;
mod markdown;
mod navigation;
pub mod normalize;
mod post;
pub mod slug;

pub use frontmatter::FrontMatter;
pub use index::{sort_posts, ContentIndex};
pub use markdown::MarkdownRenderer;
pub use navigation::Navigation;
pub use post::{Page, Post};
