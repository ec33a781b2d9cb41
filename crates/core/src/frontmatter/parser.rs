//! Front-matter parsing from markdown documents.

use super::types::{Frontmatter, FrontmatterSplit, ParsedDocument};
use thiserror::Error;

/// Errors that can occur during front-matter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Field holding an explicit excerpt.
const EXCERPT_KEY: &str = "excerpt";

/// Split a document into its front-matter block and body.
///
/// Front matter is recognised only when the first line is `---` and a later
/// line is `---` as well:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// An opening delimiter without a closing one is treated as body.
pub fn split(content: &str) -> FrontmatterSplit<'_> {
    let lines: Vec<&str> = content.split('\n').collect();

    let close = if lines.first().is_some_and(|first| first.trim() == "---") {
        lines.iter().skip(1).position(|l| l.trim() == "---")
    } else {
        None
    };

    if let Some(close) = close {
        // `close` is relative to the skipped first line
        let end = close + 2;
        let body = lines[end..].to_vec();
        let mut front_matter = lines;
        front_matter.truncate(end);
        return FrontmatterSplit { front_matter, body };
    }

    FrontmatterSplit { front_matter: Vec::new(), body: lines }
}

/// Parse front matter from markdown content.
///
/// # Errors
///
/// Returns [`FrontmatterParseError::InvalidYaml`] when the block is present
/// but is not a YAML mapping.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let parts = split(content);
    let body = parts.body.join("\n");

    let Some(yaml) = parts.yaml() else {
        return Ok(ParsedDocument { frontmatter: None, body });
    };

    let frontmatter: Frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml.trim())?
    };

    Ok(ParsedDocument { frontmatter: Some(frontmatter), body })
}

/// Read the `excerpt` field from a document's front matter.
///
/// Only non-blank string values count. Malformed YAML is logged and treated
/// as if no excerpt were set.
pub fn excerpt_field(content: &str) -> Option<String> {
    let parsed = match parse(content) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Ignoring unreadable front matter: {}", e);
            return None;
        }
    };

    let frontmatter = parsed.frontmatter?;
    match frontmatter.get_str(EXCERPT_KEY) {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        Some(_) => None,
        None => {
            if frontmatter.fields.contains_key(EXCERPT_KEY) {
                tracing::debug!("Front matter `excerpt` is not a string; ignoring it");
            }
            None
        }
    }
}
