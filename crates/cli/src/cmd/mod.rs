pub mod build;
pub mod doctor;
pub mod output;
pub mod process;

use std::path::Path;

use blog_excerpts_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use blog_excerpts_core::excerpt::{ExcerptInserter, ExcerptOptions};

use crate::OverrideArgs;

/// Load configuration and initialise logging, or exit with a message.
///
/// `verbose` is the `--verbose` flag; it is folded into the excerpt settings
/// before logging starts so the log filters see it.
pub fn load_config(config: Option<&Path>, command: &str, verbose: bool) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(mut rc) => {
            rc.excerpts.verbose |= verbose;
            crate::logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("FAIL mdexcerpt {command}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Build an inserter from config plus command-line overrides, or exit.
pub fn build_inserter(rc: &ResolvedConfig, overrides: &OverrideArgs) -> ExcerptInserter {
    let mut options: ExcerptOptions = rc.excerpts.clone();

    if let Some(raw) = overrides.max_lines {
        match ExcerptOptions::max_lines_from(raw) {
            Ok(n) => options.max_lines = n,
            Err(e) => {
                eprintln!("Invalid --max-lines: {e}");
                std::process::exit(2);
            }
        }
    }
    if let Some(ref separator) = overrides.separator {
        options.separator = separator.clone();
    }
    if overrides.verbose {
        options.verbose = true;
    }

    match ExcerptInserter::new(options) {
        Ok(inserter) => inserter,
        Err(e) => {
            eprintln!("Invalid excerpt settings: {e}");
            std::process::exit(2);
        }
    }
}
