//! Reading-time estimation

use lazy_static::lazy_static;
use regex::Regex;

/// Average adult reading speed
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Estimate minutes needed to read `text` (HTML or plain).
///
/// Tags are stripped and whitespace-separated words counted; the result is
/// rounded up and never below 1. A rate of 0 falls back to the default.
pub fn calculate_reading_time(text: &str, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };

    let plain = HTML_TAG.replace_all(text, " ");
    let words = plain.split_whitespace().count() as u64;
    let minutes = words.div_ceil(u64::from(wpm));

    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}

/// Estimate at the default rate
pub fn reading_time(text: &str) -> u32 {
    calculate_reading_time(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Format minutes for display, e.g. "3 min read"
pub fn format_reading_time(minutes: u32) -> String {
    if minutes == 1 {
        "1 min read".to_string()
    } else {
        format!("{} min read", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_text_is_one_minute() {
        assert_eq!(calculate_reading_time("", 200), 1);
        assert_eq!(reading_time("   \n\t "), 1);
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(reading_time(&words(600)), 3);
        assert_eq!(reading_time(&words(601)), 4);
        assert_eq!(reading_time(&words(200)), 1);
        assert_eq!(reading_time(&words(201)), 2);
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(calculate_reading_time(&words(500), 250), 2);
        assert_eq!(calculate_reading_time(&words(500), 0), 3);
    }

    #[test]
    fn test_strips_html_tags() {
        // tags are not words, and adjacent tags do not glue words together
        let html = "<p>one<br/>two</p>\n<pre><code class=\"language-rust\">three</code></pre>";
        let plain = HTML_TAG.replace_all(html, " ");
        assert_eq!(plain.split_whitespace().count(), 3);
        assert_eq!(reading_time(html), 1);

        let long = format!("<p>{}</p>", words(400));
        assert_eq!(reading_time(&long), 2);
    }

    #[test]
    fn test_format_reading_time() {
        assert_eq!(format_reading_time(1), "1 min read");
        assert_eq!(format_reading_time(2), "2 min read");
        assert_eq!(format_reading_time(0), "0 min read");
    }
}
