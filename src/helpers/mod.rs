//! Helper functions for the rendering layer
//!
//! Reading time, date display, URLs, taxonomy and pagination. All of them
//! are pure functions over loaded posts.

mod date;
mod list;
mod reading_time;
mod url;

pub use date::*;
pub use list::*;
pub use reading_time::*;
pub use url::*;

use crate::config::SiteConfig;
use crate::content::Post;

/// Helpers bound to a site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Absolute URL of a post
    pub fn post_url(&self, post: &Post) -> String {
        full_url_for(self.config, &slug_path(&post.slug))
    }

    /// A post's date in the configured display format
    pub fn date(&self, post: &Post) -> String {
        format_post_date(&post.date, &self.config.date_format, self.config.tz())
    }

    /// Reading time at the configured rate, for arbitrary text
    pub fn reading_time(&self, text: &str) -> String {
        format_reading_time(calculate_reading_time(
            text,
            self.config.reading.words_per_minute,
        ))
    }

    /// Page `page` of `posts` using the configured page size
    pub fn paginate<'p>(&self, posts: &'p [Post], page: usize) -> Option<Pagination<'p>> {
        paginate(posts, self.config.pagination.per_page, page)
    }
}
