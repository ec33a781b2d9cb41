//! Result types for excerpt processing.

/// What the inserter did with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcerptAction {
    /// The document is not a blog post.
    NotEligible,
    /// Processing is switched off.
    Disabled,
    /// The separator already occurs in the document.
    SeparatorPresent,
    /// No explicit excerpt and automatic placement is switched off.
    AutoInjectDisabled,
    /// An explicit excerpt was written above the separator.
    FrontmatterExcerpt,
    /// The separator was placed at a paragraph boundary.
    InsertedAtBoundary {
        /// 1-based line number of the boundary line in the input.
        line: usize,
        /// Content lines counted up to the boundary.
        content_lines: usize,
    },
    /// The document ended before a boundary was reached; the separator was
    /// appended at the end.
    AppendedAtEnd {
        /// Content lines counted in the whole body.
        content_lines: usize,
    },
}

impl ExcerptAction {
    /// Whether this action changed the document text.
    pub fn is_modified(&self) -> bool {
        matches!(
            self,
            Self::FrontmatterExcerpt
                | Self::InsertedAtBoundary { .. }
                | Self::AppendedAtEnd { .. }
        )
    }

    /// Short machine-friendly label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEligible => "not-eligible",
            Self::Disabled => "disabled",
            Self::SeparatorPresent => "separator-present",
            Self::AutoInjectDisabled => "auto-inject-disabled",
            Self::FrontmatterExcerpt => "frontmatter-excerpt",
            Self::InsertedAtBoundary { .. } => "inserted",
            Self::AppendedAtEnd { .. } => "appended",
        }
    }
}

impl std::fmt::Display for ExcerptAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsertedAtBoundary { line, content_lines } => {
                write!(f, "inserted after line {line} ({content_lines} content lines)")
            }
            Self::AppendedAtEnd { content_lines } => {
                write!(f, "appended at end ({content_lines} content lines)")
            }
            other => f.write_str(other.as_str()),
        }
    }
}

/// Transformed document plus the decision that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptOutcome {
    /// The (possibly unchanged) document text.
    pub content: String,
    /// How the text was produced.
    pub action: ExcerptAction,
}

impl ExcerptOutcome {
    pub(crate) fn unchanged(markdown: &str, action: ExcerptAction) -> Self {
        Self { content: markdown.to_string(), action }
    }

    /// Whether the content differs from the input.
    pub fn changed(&self) -> bool {
        self.action.is_modified()
    }
}
