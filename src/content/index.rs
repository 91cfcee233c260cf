//! The sorted, queryable post index

use chrono_tz::Tz;
use std::cmp::Reverse;

use super::date::parse_timestamp;
use super::{Navigation, Post};

/// All posts of one build, newest first
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    posts: Vec<Post>,
}

impl ContentIndex {
    /// Build an index, sorting `posts` by date
    pub fn new(mut posts: Vec<Post>, tz: Tz) -> Self {
        sort_posts(&mut posts, tz);
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn navigation(&self, slug: &str) -> Navigation<'_> {
        Navigation::resolve(&self.posts, slug)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentIndex {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

/// Sort newest first.
///
/// The sort is stable, so equal dates keep their enumeration order. Posts
/// whose date does not parse compare as older than every dated post.
pub fn sort_posts(posts: &mut [Post], tz: Tz) {
    posts.sort_by_cached_key(|p| Reverse(parse_timestamp(&p.date, tz)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::normalize::PostMeta;
    use crate::content::FrontMatter;
    use std::path::PathBuf;

    fn post(slug: &str, date: &str) -> Post {
        let mut meta = PostMeta::from_front_matter(&FrontMatter::default());
        meta.date = date.to_string();
        Post::from_parts(slug.to_string(), meta, String::new(), None, 1, PathBuf::new())
    }

    fn order(index: &ContentIndex) -> Vec<&str> {
        index.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_sorted_newest_first() {
        let index = ContentIndex::new(
            vec![
                post("a", "2024-01-01"),
                post("c", "2024-12-01T08:00:00Z"),
                post("b", "2024-06-01"),
            ],
            Tz::UTC,
        );
        assert_eq!(order(&index), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_partial_dates_sort_by_their_first_day() {
        let index = ContentIndex::new(
            vec![
                post("a", "2024-01-01"),
                post("b", "2024-06"),
                post("c", "2025"),
                post("d", "2024-06-02"),
            ],
            Tz::UTC,
        );
        assert_eq!(order(&index), vec!["c", "d", "b", "a"]);
    }

    #[test]
    fn test_ties_and_unparsable_dates_keep_order() {
        let index = ContentIndex::new(
            vec![
                post("blank", ""),
                post("same-1", "2024-03-03"),
                post("garbage", "someday"),
                post("same-2", "2024-03-03"),
                post("new", "2025-01-01"),
            ],
            Tz::UTC,
        );
        assert_eq!(
            order(&index),
            vec!["new", "same-1", "same-2", "blank", "garbage"]
        );
    }

    #[test]
    fn test_adjacent_pairs_are_ordered() {
        let dates = ["2021-05-05", "", "2023-01-01 10:00", "2019-02-02", "bad", "2023-01-01"];
        let posts = dates
            .iter()
            .enumerate()
            .map(|(i, d)| post(&i.to_string(), d))
            .collect();
        let index = ContentIndex::new(posts, Tz::UTC);
        for pair in index.posts().windows(2) {
            let a = parse_timestamp(&pair[0].date, Tz::UTC);
            let b = parse_timestamp(&pair[1].date, Tz::UTC);
            assert!(a >= b, "{:?} before {:?}", pair[0].date, pair[1].date);
        }
    }

    #[test]
    fn test_lookup() {
        let index = ContentIndex::new(vec![post("a", "2024-01-01"), post("b", "2024-06-01")], Tz::UTC);
        assert_eq!(index.get("a").map(|p| p.slug.as_str()), Some("a"));
        assert!(index.get("missing").is_none());
        assert_eq!(index.navigation("a").next.map(|p| p.slug.as_str()), Some("b"));
        assert_eq!(index.len(), 2);
    }
}
