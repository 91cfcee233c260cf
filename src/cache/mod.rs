//! Opt-in memoization of the post index
//!
//! `Blog::get_posts` re-reads and re-renders every post on each call. A
//! long-lived caller can hold an [`IndexCache`] instead: it fingerprints the
//! posts directory (names, sizes, modification times) and only rebuilds the
//! index when the fingerprint moves.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::content::slug::is_markdown_file;
use crate::content::{ContentIndex, Post};
use crate::error::{ContentError, Result};
use crate::Blog;

/// A post index reused until the source files change
#[derive(Debug, Default)]
pub struct IndexCache {
    fingerprint: Option<u64>,
    index: ContentIndex,
    builds: usize,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current index, rebuilt if any post source changed
    pub fn index(&mut self, blog: &Blog) -> Result<&ContentIndex> {
        let fingerprint = fingerprint(blog)?;
        if self.fingerprint != Some(fingerprint) {
            if self.fingerprint.is_some() {
                tracing::info!("Content changed, rebuilding index");
            }
            self.index = blog.load_index()?;
            self.fingerprint = Some(fingerprint);
            self.builds += 1;
        }
        Ok(&self.index)
    }

    /// The current posts, newest first
    pub fn posts(&mut self, blog: &Blog) -> Result<&[Post]> {
        Ok(self.index(blog)?.posts())
    }

    /// Drop the cached index; the next access rebuilds
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
    }

    /// How many times the index has been built
    pub fn builds(&self) -> usize {
        self.builds
    }
}

/// Hash the posts directory listing plus the settings that affect output
fn fingerprint(blog: &Blog) -> Result<u64> {
    let mut hasher = DefaultHasher::new();
    blog.posts_dir.hash(&mut hasher);
    format!(
        "{:?}{:?}{}",
        blog.config.markdown, blog.config.reading, blog.config.timezone
    )
    .hash(&mut hasher);

    if !blog.posts_dir.is_dir() {
        return Ok(hasher.finish());
    }

    for entry in WalkDir::new(&blog.posts_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(&blog.posts_dir).to_path_buf();
            ContentError::io(path, e.into())
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }
        path.hash(&mut hasher);
        let (len, mtime) = file_stamp(path)?;
        len.hash(&mut hasher);
        mtime.hash(&mut hasher);
    }

    Ok(hasher.finish())
}

/// File size and modification time (nanoseconds since the epoch)
fn file_stamp(path: &Path) -> Result<(u64, u128)> {
    let metadata = fs::metadata(path).map_err(|e| ContentError::io(path, e))?;
    let mtime = metadata
        .modified()
        .map_err(|e| ContentError::io(path, e))?
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    Ok((metadata.len(), mtime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn site() -> (tempfile::TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(
            blog.posts_dir.join("2024-01-01-a.md"),
            "---\ntitle: A\ndate: 2024-01-01\n---\nA\n",
        )
        .unwrap();
        (dir, blog)
    }

    #[test]
    fn test_reuses_unchanged_index() {
        let (_dir, blog) = site();
        let mut cache = IndexCache::new();
        assert_eq!(cache.posts(&blog).unwrap().len(), 1);
        assert_eq!(cache.posts(&blog).unwrap().len(), 1);
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn test_rebuilds_on_change() {
        let (_dir, blog) = site();
        let mut cache = IndexCache::new();
        cache.index(&blog).unwrap();

        fs::write(
            blog.posts_dir.join("2024-06-01-b.md"),
            "---\ntitle: B\ndate: 2024-06-01\n---\nB\n",
        )
        .unwrap();
        let slugs: Vec<_> = cache
            .posts(&blog)
            .unwrap()
            .iter()
            .map(|p| p.slug.clone())
            .collect();
        assert_eq!(slugs, vec!["b", "a"]);

        fs::write(
            blog.posts_dir.join("2024-01-01-a.md"),
            "---\ntitle: A, revised\ndate: 2024-01-01\n---\nA\n",
        )
        .unwrap();
        let index = cache.index(&blog).unwrap();
        assert_eq!(index.get("a").unwrap().title, "A, revised");
        assert_eq!(cache.builds(), 3);
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let (_dir, blog) = site();
        let mut cache = IndexCache::new();
        cache.index(&blog).unwrap();
        fs::write(blog.posts_dir.join("notes.txt"), "scratch").unwrap();
        cache.index(&blog).unwrap();
        assert_eq!(cache.builds(), 1);

        cache.invalidate();
        cache.index(&blog).unwrap();
        assert_eq!(cache.builds(), 2);
    }
}
