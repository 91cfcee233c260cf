//! Adjacent-post navigation over the sorted index

use serde::Serialize;

use super::Post;

/// Neighbours of a post in a newest-first index
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Navigation<'a> {
    /// The newer post, shown as "next"
    pub next: Option<&'a Post>,
    /// The older post, shown as "previous"
    pub previous: Option<&'a Post>,
}

impl<'a> Navigation<'a> {
    /// Find the neighbours of `slug` in `posts`, which must be sorted newest
    /// first. An unknown slug has no neighbours.
    pub fn resolve(posts: &'a [Post], slug: &str) -> Self {
        let Some(pos) = posts.iter().position(|p| p.slug == slug) else {
            return Self::default();
        };

        Self {
            next: pos.checked_sub(1).and_then(|i| posts.get(i)),
            previous: posts.get(pos + 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.previous.is_none()
    }
}
