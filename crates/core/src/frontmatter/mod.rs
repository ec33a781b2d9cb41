//! Front-matter detection and metadata extraction.
//!
//! This module provides functionality to:
//! - Split a document into its leading `---` block and body, line by line
//! - Parse the YAML fields of that block
//! - Read the `excerpt` field used as an explicit excerpt

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, excerpt_field, parse, split};
pub use types::{Frontmatter, FrontmatterSplit, ParsedDocument};
