//! Create a new post or page

use anyhow::Result;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Scaffold a source file and return its path.
///
/// Posts land in `posts/YYYY-MM-DD-<slug>.md`, pages in `pages/<slug>.md`.
/// Existing files are never overwritten.
pub fn create(blog: &Blog, title: &str, page: bool, date: Option<NaiveDate>) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut front_matter: IndexMap<&str, Value> = IndexMap::new();
    front_matter.insert("title", Value::from(title));
    let (target_dir, filename) = if page {
        (blog.pages_dir.clone(), format!("{}.md", slug))
    } else {
        front_matter.insert("date", Value::from(date.format("%Y-%m-%d").to_string()));
        front_matter.insert("tags", Value::Sequence(Vec::new()));
        (
            blog.posts_dir.clone(),
            format!("{}-{}.md", date.format("%Y-%m-%d"), slug),
        )
    };

    let file_path = target_dir.join(filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&target_dir)?;
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&front_matter)?);
    fs::write(&file_path, content)?;

    tracing::info!("Created {:?}", file_path);
    Ok(file_path)
}
