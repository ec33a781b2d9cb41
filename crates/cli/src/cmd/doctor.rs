use blog_excerpts_core::config::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   mdexcerpt doctor");
            println!("{}", blog_excerpts_core::doctor_stub());
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("(defaults; no file at {})", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!(
                "docs_dir: {}",
                rc.docs_dir.as_ref().map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
            );
            println!("excerpts.max_lines: {}", rc.excerpts.max_lines);
            println!("excerpts.separator: {}", rc.excerpts.separator);
            println!("excerpts.enabled: {}", rc.excerpts.enabled);
            println!("excerpts.auto_inject_separator: {}", rc.excerpts.auto_inject_separator);
            println!("excerpts.use_frontmatter_excerpt: {}", rc.excerpts.use_frontmatter_excerpt);
            println!("excerpts.verbose: {}", rc.excerpts.verbose);
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            crate::logging::init(&rc);
            tracing::debug!("doctor finished");
            crate::logging::flush();
        }
        Err(e) => {
            println!("FAIL mdexcerpt doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
