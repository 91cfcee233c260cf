//! Front-matter normalization
//!
//! Authors write front matter loosely: tags as a list or a comma string,
//! numbers where strings are expected, `math: yes`. Everything here is total
//! and pure. A missing or oddly-typed field resolves to its default instead
//! of failing.

use serde_yaml::Value;

use super::FrontMatter;

/// Default title for posts without one
pub const UNTITLED: &str = "Untitled";

/// Normalized post metadata, before markdown rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub date: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Raw excerpt markdown
    pub excerpt: Option<String>,
    pub math: bool,
}

/// Normalized page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub date: Option<String>,
}

impl PostMeta {
    pub fn from_front_matter(fm: &FrontMatter) -> Self {
        Self {
            title: present_scalar(fm.get("title")).unwrap_or_else(|| UNTITLED.to_string()),
            date: scalar_string(fm.get("date")).unwrap_or_default(),
            category: non_empty_scalar(fm.get("category")),
            tags: normalize_tags(fm.get("tags")),
            excerpt: fm
                .get("excerpt")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
            math: truthy(fm.get("math")),
        }
    }
}

impl PageMeta {
    pub fn from_front_matter(fm: &FrontMatter, slug: &str) -> Self {
        Self {
            title: present_scalar(fm.get("title")).unwrap_or_else(|| slug.to_string()),
            date: scalar_string(fm.get("date")).filter(|d| !d.is_empty()),
        }
    }
}

/// Normalize a `tags` value.
///
/// A sequence is kept as written, with numbers and booleans stringified and
/// nested values dropped. A string is split on commas, trimming each segment
/// and dropping empty ones.
pub fn normalize_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| scalar_string(Some(item)))
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Interpret a flag the way authors mean it
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on"
        ),
        _ => false,
    }
}

/// Render a scalar as a string; non-scalars have no string form
fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_string(Some(&tagged.value)),
        _ => None,
    }
}

/// A scalar that is set: `false`, zero and the empty string count as unset
fn present_scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Tagged(tagged) => present_scalar(Some(&tagged.value)),
        other => scalar_string(Some(other)).filter(|s| !s.is_empty()),
    }
}

fn non_empty_scalar(value: Option<&Value>) -> Option<String> {
    scalar_string(value)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(yaml: &str) -> FrontMatter {
        let doc = format!("---\n{}\n---\n", yaml);
        let (fm, _) = FrontMatter::parse(&doc);
        fm
    }

    #[test]
    fn test_post_defaults() {
        let meta = PostMeta::from_front_matter(&FrontMatter::default());
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.date, "");
        assert_eq!(meta.category, None);
        assert!(meta.tags.is_empty());
        assert_eq!(meta.excerpt, None);
        assert!(!meta.math);
    }

    #[test]
    fn test_post_full() {
        let meta = PostMeta::from_front_matter(&fm(
            "title: Hello\ndate: 2024-06-01\ncategory: rust\ntags: [a, b]\nexcerpt: \"*short*\"\nmath: true",
        ));
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date, "2024-06-01");
        assert_eq!(meta.category.as_deref(), Some("rust"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.excerpt.as_deref(), Some("*short*"));
        assert!(meta.math);
    }

    #[test]
    fn test_comma_separated_tags() {
        let meta = PostMeta::from_front_matter(&fm("tags: \"rust, , svelte ,blog,\""));
        assert_eq!(meta.tags, vec!["rust", "svelte", "blog"]);
    }

    #[test]
    fn test_tag_list_with_mixed_items() {
        let meta = PostMeta::from_front_matter(&fm("tags:\n  - rust\n  - 2024\n  - {nested: map}"));
        assert_eq!(meta.tags, vec!["rust", "2024"]);
    }

    #[test]
    fn test_tag_list_is_kept_as_written() {
        let meta = PostMeta::from_front_matter(&fm("tags: [\" spaced \", \"\", rust]"));
        assert_eq!(meta.tags, vec![" spaced ", "", "rust"]);
    }

    #[test]
    fn test_falsy_title_is_untitled() {
        for yaml in ["title: false", "title: 0", "title: \"\"", "title:"] {
            assert_eq!(PostMeta::from_front_matter(&fm(yaml)).title, "Untitled", "{}", yaml);
        }
        assert_eq!(PageMeta::from_front_matter(&fm("title: false"), "about").title, "about");
        assert_eq!(PostMeta::from_front_matter(&fm("title: \" Padded \"")).title, " Padded ");
    }

    #[test]
    fn test_wrong_typed_fields_use_defaults() {
        let meta = PostMeta::from_front_matter(&fm(
            "title: [not, a, title]\ntags: 42\ncategory: \"\"\nexcerpt: 7\nmath: maybe",
        ));
        assert_eq!(meta.title, "Untitled");
        assert!(meta.tags.is_empty());
        assert_eq!(meta.category, None);
        assert_eq!(meta.excerpt, None);
        assert!(!meta.math);
    }

    #[test]
    fn test_scalar_title_and_date_are_stringified() {
        let meta = PostMeta::from_front_matter(&fm("title: 1984\ndate: 2024"));
        assert_eq!(meta.title, "1984");
        assert_eq!(meta.date, "2024");
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(Some(&Value::Bool(true))));
        assert!(truthy(Some(&Value::String("Yes".to_string()))));
        assert!(truthy(Some(&Value::from(1))));
        assert!(!truthy(Some(&Value::from(0))));
        assert!(!truthy(Some(&Value::String("false".to_string()))));
        assert!(!truthy(Some(&Value::Null)));
        assert!(!truthy(None));
    }

    #[test]
    fn test_page_meta() {
        let meta = PageMeta::from_front_matter(&FrontMatter::default(), "about");
        assert_eq!(meta.title, "about");
        assert_eq!(meta.date, None);

        let meta = PageMeta::from_front_matter(&fm("title: About me\ndate: 2024-02-02"), "about");
        assert_eq!(meta.title, "About me");
        assert_eq!(meta.date.as_deref(), Some("2024-02-02"));
    }
}
