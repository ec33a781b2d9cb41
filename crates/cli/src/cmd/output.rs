//! Shared output formatting for the build report.

use blog_excerpts_core::excerpt::ExcerptAction;
use serde::Serialize;
use tabled::Tabled;

/// One processed file, for table and JSON output.
#[derive(Debug, Serialize, Tabled)]
pub struct FileReport {
    #[tabled(rename = "File")]
    pub path: String,
    #[tabled(rename = "Action")]
    pub action: String,
    #[tabled(rename = "Modified")]
    pub modified: bool,
    #[tabled(rename = "Written")]
    pub written: bool,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_lines: Option<usize>,
}

impl FileReport {
    pub fn new(path: String, action: ExcerptAction, written: bool) -> Self {
        let (line, content_lines) = match action {
            ExcerptAction::InsertedAtBoundary { line, content_lines } => {
                (Some(line), Some(content_lines))
            }
            ExcerptAction::AppendedAtEnd { content_lines } => (None, Some(content_lines)),
            _ => (None, None),
        };
        Self {
            path,
            action: action.as_str().to_string(),
            modified: action.is_modified(),
            written,
            line,
            content_lines,
        }
    }
}

/// Build summary for JSON output.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub docs_dir: String,
    pub files: Vec<FileReport>,
    pub modified: usize,
}
