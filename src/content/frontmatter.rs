//! Front-matter parsing
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello World
//! tags: rust, blog
//! ---
//! Body text.
//! ```
//!
//! Parsing never fails. A block that is not a YAML mapping with at least one
//! key is treated as absent and the whole input becomes the body.

use indexmap::IndexMap;
use serde_yaml::Value;

/// Raw front-matter fields, in source order.
///
/// Values keep their YAML shape; turning them into typed post fields is the
/// job of [`crate::content::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Split a document into its front matter and body.
    ///
    /// When no well-formed block is present the metadata is empty and the
    /// body is the input, unchanged.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some((block, body)) = split_block(content) else {
            return (FrontMatter::default(), content);
        };

        // `---\n---` is a valid, empty block
        if block.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<Value>(block) {
            Ok(Value::Mapping(mapping)) if !mapping.is_empty() => {
                let fields = mapping
                    .into_iter()
                    .filter_map(|(key, value)| scalar_key(key).map(|k| (k, value)))
                    .collect();
                (FrontMatter { fields }, body)
            }
            // Comments only
            Ok(Value::Null) => (FrontMatter::default(), body),
            // A thematic break around prose parses as a plain scalar
            Ok(_) => {
                tracing::debug!("Front-matter block is not a mapping, treating as content");
                (FrontMatter::default(), content)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Build front matter directly from fields
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// Locate the `---` fenced block at the very start of `content`.
/// Returns `(block, body)` where body starts after the closing fence line.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next()?;
    if !is_fence(opening) {
        return None;
    }

    let block_start = opening.len();
    let mut offset = block_start;
    for line in lines {
        if is_fence(line) {
            let block = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

fn scalar_key(key: Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
