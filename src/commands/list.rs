//! List site content

use anyhow::Result;

use crate::helpers::{self, Helpers};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let helpers = Helpers::new(&blog.config);

    match content_type {
        "post" | "posts" => {
            let posts = blog.get_posts()?;
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {:<12} {} ({}) [{}]",
                    helpers.date(post),
                    post.title,
                    post.reading_time_label(),
                    post.slug
                );
            }
        }
        "page" | "pages" => {
            let pages = blog.get_pages()?;
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("  {} [{}]", page.title, page.slug);
            }
        }
        "tag" | "tags" => {
            let posts = blog.get_posts()?;
            let tags = helpers::tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {} ({})", tag.name, tag.count);
            }
        }
        "category" | "categories" => {
            let posts = blog.get_posts()?;
            let categories = helpers::category_counts(&posts);
            println!("Categories ({}):", categories.len());
            for category in categories {
                println!("  {} ({})", category.name, category.count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, tag, category",
                content_type
            );
        }
    }

    Ok(())
}
