//! postloom: content pipeline for a markdown blog
//!
//! Reads posts and pages from a content directory, parses their front
//! matter, renders markdown to HTML and exposes a date-sorted index for a
//! rendering layer to consume.
//!
//! ```no_run
//! let blog = postloom::Blog::new(".")?;
//! for post in blog.get_posts()? {
//!     println!("{} {}", post.date, post.title);
//! }
//! # Ok::<(), postloom::error::ContentError>(())
//! ```

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::{ContentIndex, Page, Post};
use error::{ContentError, ContentKind, Result};

/// Site configuration file, looked up in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root
    pub content_dir: PathBuf,
    /// Directory holding `YYYY-MM-DD-<slug>.md` posts
    pub posts_dir: PathBuf,
    /// Directory holding `<slug>.md` pages
    pub pages_dir: PathBuf,
}

impl Blog {
    /// Open a blog, reading `_config.yml` when the directory has one
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_root);
        let posts_dir = content_dir.join(&config.posts_dir);
        let pages_dir = content_dir.join(&config.pages_dir);

        Self {
            config,
            base_dir,
            content_dir,
            posts_dir,
            pages_dir,
        }
    }

    /// All posts, newest first
    pub fn get_posts(&self) -> Result<Vec<Post>> {
        ContentLoader::new(self).load_posts()
    }

    /// All posts as a queryable index
    pub fn load_index(&self) -> Result<ContentIndex> {
        ContentLoader::new(self).load_index()
    }

    /// Find a post by slug, rebuilding the index
    pub fn get_post_by_slug(&self, slug: &str) -> Result<Post> {
        self.get_posts()?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound {
                kind: ContentKind::Post,
                slug: slug.to_string(),
            })
    }

    /// All pages, in filename order
    pub fn get_pages(&self) -> Result<Vec<Page>> {
        ContentLoader::new(self).load_pages()
    }

    /// Find a page by slug
    pub fn get_page_by_slug(&self, slug: &str) -> Result<Page> {
        self.get_pages()?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound {
                kind: ContentKind::Page,
                slug: slug.to_string(),
            })
    }
}
