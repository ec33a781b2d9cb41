//! Front-matter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML front matter from a markdown document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// Get a string field, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Result of parsing front matter out of markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed front matter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after front matter).
    pub body: String,
}

/// A document split into its front-matter lines and body lines.
///
/// Joining `front_matter` followed by `body` with `\n` reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// Lines of the front-matter block, both delimiters included. Empty when
    /// the document has no (terminated) front matter.
    pub front_matter: Vec<&'a str>,
    /// Remaining lines.
    pub body: Vec<&'a str>,
}

impl FrontmatterSplit<'_> {
    pub fn has_front_matter(&self) -> bool {
        !self.front_matter.is_empty()
    }

    /// YAML text between the delimiters.
    pub fn yaml(&self) -> Option<String> {
        match self.front_matter.len() {
            n if n >= 2 => Some(self.front_matter[1..n - 1].join("\n")),
            _ => None,
        }
    }
}
