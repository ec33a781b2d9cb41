//! Recursive docs directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum SiteWalkerError {
    #[error("docs directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk docs directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered markdown file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the docs directory.
    pub relative_path: PathBuf,
}

impl WalkedFile {
    /// Relative path with `/` separators, the form used for eligibility
    /// checks.
    pub fn src_path(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Walker for discovering markdown files in a docs directory.
#[derive(Debug)]
pub struct SiteWalker {
    root: PathBuf,
}

impl SiteWalker {
    /// Create a new walker for the given docs directory.
    ///
    /// # Errors
    ///
    /// Returns [`SiteWalkerError::MissingRoot`] when `root` does not exist.
    pub fn new(root: &Path) -> Result<Self, SiteWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| SiteWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(SiteWalkerError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Walk the docs directory and return all markdown files, sorted by
    /// relative path. Hidden entries and common build directories are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SiteWalkerError::WalkError`] when a directory cannot be read.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, SiteWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry
                .map_err(|e| SiteWalkerError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::debug!("Found {} markdown files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Get the docs directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || matches!(name.as_ref(), "node_modules" | "site" | "target")
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
