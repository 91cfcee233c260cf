//! Taxonomy and pagination helpers over a post list

use serde::Serialize;
use std::collections::HashMap;

use crate::content::Post;

/// A tag or category with the number of posts using it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// Name as first written
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// Count tags across posts.
///
/// Spellings that slugify alike ("Rust", "rust") are one tag. Sorted by
/// count, then name.
pub fn tag_counts(posts: &[Post]) -> Vec<TermCount> {
    count_terms(posts.iter().flat_map(|p| p.tags.iter()))
}

/// Count categories across posts
pub fn category_counts(posts: &[Post]) -> Vec<TermCount> {
    count_terms(posts.iter().filter_map(|p| p.category.as_ref()))
}

/// Posts carrying `tag`, compared by slug
pub fn posts_with_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    let wanted = slug::slugify(tag);
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| slug::slugify(t) == wanted))
        .collect()
}

/// Posts filed under `category`, compared by slug
pub fn posts_in_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    let wanted = slug::slugify(category);
    posts
        .iter()
        .filter(|p| p.category.as_deref().map(slug::slugify) == Some(wanted.clone()))
        .collect()
}

fn count_terms<'a>(terms: impl Iterator<Item = &'a String>) -> Vec<TermCount> {
    let mut counts: HashMap<String, TermCount> = HashMap::new();

    for term in terms {
        let slug = slug::slugify(term);
        counts
            .entry(slug.clone())
            .or_insert_with(|| TermCount {
                name: term.clone(),
                slug,
                count: 0,
            })
            .count += 1;
    }

    let mut sorted: Vec<_> = counts.into_values().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    sorted
}

/// One page of a post listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination<'a> {
    pub items: &'a [Post],
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Slice `posts` into pages of `per_page` and return page `page` (1-based).
///
/// An empty list still has one (empty) page. `per_page == 0` puts everything
/// on one page. Out-of-range pages return `None`.
pub fn paginate(posts: &[Post], per_page: usize, page: usize) -> Option<Pagination<'_>> {
    let per_page = if per_page == 0 {
        posts.len().max(1)
    } else {
        per_page
    };
    let total_pages = posts.len().div_ceil(per_page).max(1);
    if page == 0 || page > total_pages {
        return None;
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(posts.len());

    Some(Pagination {
        items: &posts[start..end],
        page,
        total_pages,
        prev: (page > 1).then(|| page - 1),
        next: (page < total_pages).then(|| page + 1),
    })
}
