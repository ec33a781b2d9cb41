use std::path::PathBuf;

use serde::Deserialize;

use crate::excerpt::{DEFAULT_MAX_LINES, DEFAULT_SEPARATOR, ExcerptOptions};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Directory holding the site's markdown sources.
    pub docs_dir: Option<String>,
    #[serde(default)]
    pub excerpts: ExcerptsSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `[excerpts]` table, as written by the user.
///
/// `max_lines` is read as a signed integer so that zero and negative values
/// are reported as validation errors rather than TOML type errors.
#[derive(Debug, Deserialize, Clone)]
pub struct ExcerptsSection {
    #[serde(default = "default_max_lines")]
    pub max_lines: i64,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_true", alias = "enabled")]
    pub enable_truncation: bool,
    #[serde(default = "default_true")]
    pub auto_inject_separator: bool,
    #[serde(default = "default_true")]
    pub use_frontmatter_excerpt: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ExcerptsSection {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            separator: default_separator(),
            enable_truncation: true,
            auto_inject_separator: true,
            use_frontmatter_excerpt: true,
            verbose: false,
        }
    }
}

fn default_max_lines() -> i64 {
    i64::try_from(DEFAULT_MAX_LINES).unwrap_or(i64::MAX)
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
    pub docs_dir: Option<PathBuf>,
    pub excerpts: ExcerptOptions,
    pub logging: LoggingConfig,
}
