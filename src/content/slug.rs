//! Slug derivation from source filenames
//!
//! Posts are named `YYYY-MM-DD-<slug>.md`, pages `<slug>.md`. The slug is
//! what remains after the date prefix and the extension are removed.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref DATE_PREFIX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}-").unwrap();
}

/// File extensions treated as markdown sources
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Derive a post slug: strip a leading `YYYY-MM-DD-` and the extension.
///
/// ```
/// use postloom::content::slug::post_slug;
/// assert_eq!(post_slug("2024-01-15-hello-world.md"), "hello-world");
/// ```
pub fn post_slug(filename: &str) -> String {
    let stem = strip_extension(filename);
    DATE_PREFIX.replace(stem, "").into_owned()
}

/// Derive a page slug: strip the extension only.
pub fn page_slug(filename: &str) -> String {
    strip_extension(filename).to_string()
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MARKDOWN_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

fn strip_extension(filename: &str) -> &str {
    MARKDOWN_EXTENSIONS
        .iter()
        .find_map(|ext| {
            filename
                .strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .unwrap_or(filename)
}
