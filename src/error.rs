//! Error types for content loading

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Which collection a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Page,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Post => f.write_str("post"),
            ContentKind::Page => f.write_str("page"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("{kind} not found: {slug}")]
    NotFound { kind: ContentKind, slug: String },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when this error is a missing post or page
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}
