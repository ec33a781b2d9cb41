//! Options controlling separator placement.

use thiserror::Error;

/// Marker inserted when no separator is configured.
pub const DEFAULT_SEPARATOR: &str = "<!-- more -->";

/// Number of content lines kept in an automatic excerpt by default.
pub const DEFAULT_MAX_LINES: usize = 10;

/// Errors raised when options cannot be used for placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("max_lines must be a positive integer (got {0})")]
    InvalidMaxLines(i64),

    #[error("separator must not be empty")]
    EmptySeparator,
}

/// Settings for an [`ExcerptInserter`](super::ExcerptInserter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Content lines after which the separator should appear.
    pub max_lines: usize,
    /// Literal marker text, also used to detect already-processed documents.
    pub separator: String,
    /// Master switch.
    pub enabled: bool,
    /// Whether an explicit excerpt (e.g. front matter `excerpt:`) wins over
    /// automatic placement.
    pub use_frontmatter_excerpt: bool,
    /// Whether automatic placement runs when no explicit excerpt applies.
    pub auto_inject_separator: bool,
    /// Emit placement decisions at `info` instead of `debug`.
    pub verbose: bool,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            separator: DEFAULT_SEPARATOR.to_string(),
            enabled: true,
            use_frontmatter_excerpt: true,
            auto_inject_separator: true,
            verbose: false,
        }
    }
}

impl ExcerptOptions {
    /// Check that the options can drive placement.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidMaxLines`] for a zero threshold and
    /// [`OptionsError::EmptySeparator`] for an empty or blank separator.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_lines == 0 {
            return Err(OptionsError::InvalidMaxLines(0));
        }
        if self.separator.trim().is_empty() {
            return Err(OptionsError::EmptySeparator);
        }
        Ok(())
    }

    /// Convert a raw integer threshold (as read from configuration) into a
    /// line count.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidMaxLines`] when `raw` is not positive.
    pub fn max_lines_from(raw: i64) -> Result<usize, OptionsError> {
        match usize::try_from(raw) {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(OptionsError::InvalidMaxLines(raw)),
        }
    }
}
