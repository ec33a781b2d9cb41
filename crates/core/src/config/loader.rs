use crate::config::types::{ConfigFile, ExcerptsSection, LoggingConfig, ResolvedConfig};
use crate::excerpt::{ExcerptOptions, OptionsError};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("invalid [excerpts] settings: {0}")]
    InvalidOptions(#[from] OptionsError),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default
    /// location is tried and built-in defaults are used when nothing is
    /// there.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, has
    /// an unsupported version, or holds invalid excerpt settings.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    tracing::debug!("No config at {}; using defaults", p.display());
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let mut resolved = Self::resolve(&cf)?;
        resolved.source = Some(path);
        Ok(resolved)
    }

    fn resolve(cf: &ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let docs_dir = cf.docs_dir.as_deref().map(expand_path).transpose()?;
        let excerpts = resolve_excerpts(&cf.excerpts)?;

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig { source: None, docs_dir, excerpts, logging })
    }
}

fn resolve_excerpts(section: &ExcerptsSection) -> Result<ExcerptOptions, OptionsError> {
    let options = ExcerptOptions {
        max_lines: ExcerptOptions::max_lines_from(section.max_lines)?,
        separator: section.separator.clone(),
        enabled: section.enable_truncation,
        use_frontmatter_excerpt: section.use_frontmatter_excerpt,
        auto_inject_separator: section.auto_inject_separator,
        verbose: section.verbose,
    };
    options.validate()?;
    Ok(options)
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("blog-excerpts").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("blog-excerpts").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
