//! Post and Page models

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::normalize::{PageMeta, PostMeta};

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Slug derived from the filename, unique within a post set
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in front matter ("" when absent)
    pub date: String,

    pub category: Option<String>,

    /// Post tags, in front-matter order
    pub tags: Vec<String>,

    /// Rendered excerpt HTML, only when front matter declares one
    pub excerpt: Option<String>,

    /// Rendered HTML content
    pub content: String,

    /// Whether the post needs math typesetting
    pub math: bool,

    /// Estimated reading time in minutes
    pub reading_time: u32,

    /// Source file path
    #[serde(skip_serializing_if = "is_empty_path", default)]
    pub source: PathBuf,
}

impl Post {
    pub(crate) fn from_parts(
        slug: String,
        meta: PostMeta,
        content: String,
        excerpt: Option<String>,
        reading_time: u32,
        source: PathBuf,
    ) -> Self {
        Self {
            slug,
            title: meta.title,
            date: meta.date,
            category: meta.category,
            tags: meta.tags,
            excerpt,
            content,
            math: meta.math,
            reading_time,
            source,
        }
    }

    /// Reading time for display, e.g. "3 min read"
    pub fn reading_time_label(&self) -> String {
        crate::helpers::format_reading_time(self.reading_time)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A standalone page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,

    /// Page title, the slug when front matter has none
    pub title: String,

    /// Rendered HTML content
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,

    /// Source file path
    #[serde(skip_serializing_if = "is_empty_path", default)]
    pub source: PathBuf,
}

impl Page {
    pub(crate) fn from_parts(slug: String, meta: PageMeta, content: String, source: PathBuf) -> Self {
        Self {
            slug,
            title: meta.title,
            content,
            date: meta.date,
            source,
        }
    }
}

fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
