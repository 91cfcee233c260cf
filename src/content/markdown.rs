//! Markdown rendering with optional syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::MarkdownConfig;

/// Markdown renderer.
///
/// Rendering is pure: no I/O, and the same input always yields the same
/// HTML. By default code blocks are left as `<pre><code class="language-x">`
/// for a client-side highlighter.
pub struct MarkdownRenderer {
    highlighter: Option<Highlighter>,
    smart_punctuation: bool,
}

struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            highlighter: None,
            smart_punctuation: false,
        }
    }

    /// Create with custom settings
    pub fn from_config(config: &MarkdownConfig) -> Self {
        let highlighter = if config.highlight {
            Highlighter::load(&config.theme, config.line_numbers)
        } else {
            None
        };
        Self {
            highlighter,
            smart_punctuation: config.smart_punctuation,
        }
    }

    /// Render markdown to HTML.
    ///
    /// With `math` set, `$inline$` and `$$display$$` spans are emitted for a
    /// client-side math typesetter.
    pub fn render(&self, markdown: &str, math: bool) -> String {
        // YAML metadata blocks stay off; FrontMatter::parse owns those
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        if math {
            options |= Options::ENABLE_MATH;
        }
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        match &self.highlighter {
            Some(highlighter) => {
                html::push_html(&mut html_output, highlighter.highlight_events(parser))
            }
            None => html::push_html(&mut html_output, parser),
        }
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    fn load(theme_name: &str, line_numbers: bool) -> Option<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown highlight theme {:?}, using fallback", theme_name);
                let (_, theme) = theme_set.themes.into_iter().next()?;
                theme
            }
        };
        Some(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers,
        })
    }

    /// Replace every code block with pre-highlighted HTML
    fn highlight_events<'a>(&self, parser: Parser<'a>) -> impl Iterator<Item = Event<'a>> {
        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                other => events.push(other),
            }
        }

        events.into_iter()
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let lang = html_escape(lang);
        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) if self.line_numbers => {
                let gutter = (1..=code.lines().count().max(1))
                    .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
                    lang, gutter, highlighted
                )
            }
            Ok(highlighted) => {
                format!(r#"<figure class="highlight {}">{}</figure>"#, lang, highlighted)
            }
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighting() -> MarkdownRenderer {
        MarkdownRenderer::from_config(&MarkdownConfig {
            highlight: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.", false);
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = highlighting();
        let source = "# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn main() {}\n```\n\n- [x] done\n";
        assert_eq!(renderer.render(source, false), renderer.render(source, false));
    }

    #[test]
    fn test_code_block_keeps_language_class() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```python\nprint('hi')\n```", false);
        assert!(html.contains(r#"<code class="language-python">"#));
    }

    #[test]
    fn test_render_highlighted_code_block() {
        let html = highlighting().render("```rust\nfn main() {}\n```", false);
        assert!(html.contains(r#"<figure class="highlight rust">"#));
        assert!(html.contains("style="));
        assert!(!html.contains("language-rust"));
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::from_config(&MarkdownConfig {
            highlight: true,
            line_numbers: true,
            ..Default::default()
        });
        let html = renderer.render("```\na\nb\n```", false);
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_math_only_when_enabled() {
        let renderer = MarkdownRenderer::new();
        let with_math = renderer.render("Euler: $e^{i\\pi} + 1 = 0$", true);
        assert!(with_math.contains("math-inline"));
        let without = renderer.render("Costs $5 and $6", false);
        assert!(!without.contains("math-inline"));
        assert!(without.contains("$5"));
    }

    #[test]
    fn test_gfm_extensions() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("~~gone~~\n\n| a |\n|---|\n| 1 |\n", false);
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }
}
