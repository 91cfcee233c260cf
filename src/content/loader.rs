//! Content loader - loads posts and pages from the content directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::normalize::{PageMeta, PostMeta};
use super::slug::{is_markdown_file, page_slug, post_slug};
use super::{ContentIndex, FrontMatter, MarkdownRenderer, Page, Post};
use crate::error::{ContentError, Result};
use crate::helpers::calculate_reading_time;
use crate::Blog;

/// Loads content from the content directory.
///
/// Every call re-reads the directory; nothing is cached between calls.
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::from_config(&blog.config.markdown);
        Self { blog, renderer }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        Ok(self.load_index()?.into_posts())
    }

    /// Load all posts into a sorted index
    pub fn load_index(&self) -> Result<ContentIndex> {
        let mut posts = Vec::new();
        let mut seen = HashMap::new();

        for path in self.source_files(&self.blog.posts_dir)? {
            let Some(raw) = self.read_source(&path)? else {
                continue;
            };
            let post = self.parse_post(&path, &raw);
            insert_unique(&mut posts, &mut seen, post, |p| &p.slug, |p| &p.source);
        }

        let index = ContentIndex::new(posts, self.blog.config.tz());
        tracing::info!(
            "Loaded {} posts from {:?}",
            index.len(),
            self.blog.posts_dir
        );
        Ok(index)
    }

    /// Build a post from its source text
    pub fn parse_post(&self, path: &Path, raw: &str) -> Post {
        let slug = post_slug(&file_name(path));
        let (fm, body) = FrontMatter::parse(raw);
        let meta = PostMeta::from_front_matter(&fm);

        let content = self.renderer.render(body, meta.math);
        let excerpt = meta
            .excerpt
            .as_deref()
            .map(|excerpt| self.renderer.render(excerpt, meta.math));
        let reading_time =
            calculate_reading_time(&content, self.blog.config.reading.words_per_minute);

        tracing::debug!("Loaded post {} ({:?})", slug, path);
        Post::from_parts(slug, meta, content, excerpt, reading_time, path.to_path_buf())
    }

    /// Load all pages, in filename order
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut seen = HashMap::new();

        for path in self.source_files(&self.blog.pages_dir)? {
            let Some(raw) = self.read_source(&path)? else {
                continue;
            };
            let page = self.parse_page(&path, &raw);
            insert_unique(&mut pages, &mut seen, page, |p| &p.slug, |p| &p.source);
        }

        tracing::info!(
            "Loaded {} pages from {:?}",
            pages.len(),
            self.blog.pages_dir
        );
        Ok(pages)
    }

    /// Build a page from its source text
    pub fn parse_page(&self, path: &Path, raw: &str) -> Page {
        let slug = page_slug(&file_name(path));
        let (fm, body) = FrontMatter::parse(raw);
        let meta = PageMeta::from_front_matter(&fm, &slug);
        let content = self.renderer.render(body, false);

        tracing::debug!("Loaded page {} ({:?})", slug, path);
        Page::from_parts(slug, meta, content, path.to_path_buf())
    }

    /// Markdown files directly inside `dir`, in lexicographic order.
    /// A missing directory yields no files.
    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            tracing::debug!("Content directory {:?} does not exist", dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                ContentError::io(path, e.into())
            })?;
            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Read a source file. Unreadable files abort the build unless the
    /// config asks to skip them.
    fn read_source(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if self.blog.config.content.skip_unreadable => {
                tracing::warn!("Skipping unreadable file {:?}: {}", path, e);
                Ok(None)
            }
            Err(e) => Err(ContentError::io(path, e)),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Push `item`, or replace the earlier entry with the same slug.
///
/// Files arrive in lexicographic order, so the last filename wins and the
/// result does not depend on how the platform enumerates directories.
fn insert_unique<T>(
    items: &mut Vec<T>,
    seen: &mut HashMap<String, usize>,
    item: T,
    slug: impl Fn(&T) -> &String,
    source: impl Fn(&T) -> &PathBuf,
) {
    match seen.get(slug(&item)) {
        Some(&i) => {
            tracing::warn!(
                "Slug {:?} from {:?} replaces {:?}",
                slug(&item),
                source(&item),
                source(&items[i])
            );
            items[i] = item;
        }
        None => {
            seen.insert(slug(&item).clone(), items.len());
            items.push(item);
        }
    }
}
