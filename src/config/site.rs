//! Site configuration (_config.yml)

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ContentError, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub email: String,
    pub url: String,
    pub language: String,
    pub timezone: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub links: Vec<SiteLink>,

    // Directory
    pub content_root: String,
    pub posts_dir: String,
    pub pages_dir: String,

    // Date / Time format
    pub date_format: String,

    #[serde(default)]
    pub reading: ReadingConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "blog".to_string(),
            author: String::new(),
            email: String::new(),
            url: "http://example.com".to_string(),
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            social: Vec::new(),
            links: Vec::new(),

            content_root: "content".to_string(),
            posts_dir: "posts".to_string(),
            pages_dir: "pages".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            reading: ReadingConfig::default(),
            markdown: MarkdownConfig::default(),
            content: ContentConfig::default(),
            pagination: PaginationConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|e| ContentError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Site timezone, used for date-times written without an offset.
    /// Unknown zone names fall back to UTC.
    pub fn tz(&self) -> Tz {
        match self.timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Unknown timezone {:?}, using UTC", self.timezone);
                Tz::UTC
            }
        }
    }
}

/// A social profile link shown by the site chrome
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// A blogroll entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLink {
    pub title: String,
    pub url: String,
}

/// Reading-time estimation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: crate::helpers::DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Markdown rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Highlight code blocks server-side with syntect
    pub highlight: bool,
    pub theme: String,
    pub line_numbers: bool,
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight: false,
            theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
            smart_punctuation: false,
        }
    }
}

/// Content loading behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Skip files that cannot be read instead of failing the whole build
    pub skip_unreadable: bool,
}

/// Pagination settings for post listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { per_page: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_root, "content");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.reading.words_per_minute, 200);
        assert_eq!(config.pagination.per_page, 10);
        assert!(!config.markdown.highlight);
        assert!(!config.content.skip_unreadable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: fmaz blog
author: fmaz
timezone: America/New_York
content_root: fixtures
social:
  - name: GitHub
    url: https://github.com/example
    icon: fab fa-github
pagination:
  per_page: 5
reading:
  words_per_minute: 250
markdown:
  highlight: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "fmaz blog");
        assert_eq!(config.content_root, "fixtures");
        assert_eq!(config.social.len(), 1);
        assert_eq!(config.social[0].name, "GitHub");
        assert_eq!(config.pagination.per_page, 5);
        assert_eq!(config.reading.words_per_minute, 250);
        assert!(config.markdown.highlight);
        // untouched nested defaults survive a partial section
        assert_eq!(config.markdown.theme, "base16-ocean.dark");
        assert_eq!(config.tz(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let config = SiteConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tz(), Tz::UTC);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: [unclosed").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::Config { .. }));
    }
}
