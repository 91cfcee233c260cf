//! Show a single post or page

use anyhow::Result;
use serde_json::json;

use crate::content::{Navigation, Post};
use crate::error::{ContentError, ContentKind};
use crate::helpers::Helpers;
use crate::Blog;

/// Print a post with its neighbours, or a page
pub fn run(blog: &Blog, slug: &str, page: bool, as_json: bool) -> Result<()> {
    if page {
        let page = blog.get_page_by_slug(slug)?;
        if as_json {
            println!("{}", serde_json::to_string_pretty(&page)?);
        } else {
            println!("{}\n", page.title);
            println!("{}", page.content);
        }
        return Ok(());
    }

    let index = blog.load_index()?;
    let post = index.get(slug).ok_or_else(|| ContentError::NotFound {
        kind: ContentKind::Post,
        slug: slug.to_string(),
    })?;
    let nav = index.navigation(slug);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&post_json(post, &nav))?);
        return Ok(());
    }

    let helpers = Helpers::new(&blog.config);
    println!("{}", post.title);
    println!("{} · {}", helpers.date(post), post.reading_time_label());
    if let Some(category) = &post.category {
        println!("category: {}", category);
    }
    if !post.tags.is_empty() {
        println!("tags: {}", post.tags.join(", "));
    }
    println!("url: {}\n", helpers.post_url(post));
    println!("{}", post.content);

    if let Some(next) = nav.next {
        println!("next: {} [{}]", next.title, next.slug);
    }
    if let Some(previous) = nav.previous {
        println!("previous: {} [{}]", previous.title, previous.slug);
    }

    Ok(())
}

fn post_json(post: &Post, nav: &Navigation<'_>) -> serde_json::Value {
    json!({
        "post": post,
        "next": nav.next.map(summary),
        "previous": nav.previous.map(summary),
    })
}

fn summary(post: &Post) -> serde_json::Value {
    json!({ "slug": post.slug, "title": post.title, "date": post.date })
}
