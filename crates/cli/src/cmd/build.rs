//! Build command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use blog_excerpts_core::site::SiteWalker;
use tabled::{settings::Style, Table};

use super::output::{BuildReport, FileReport};
use crate::BuildArgs;

pub fn run(config: Option<&Path>, args: &BuildArgs) {
    let rc = super::load_config(config, "build", args.overrides.verbose);
    let inserter = super::build_inserter(&rc, &args.overrides);

    let Some(docs_dir) = args.docs_dir.clone().or_else(|| rc.docs_dir.clone()) else {
        eprintln!("No docs directory: pass --docs-dir or set docs_dir in the config");
        std::process::exit(2);
    };

    let walker = match SiteWalker::new(&docs_dir) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let files = match walker.walk() {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let content = match fs::read_to_string(&file.absolute_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading {}: {}", file.absolute_path.display(), e);
                std::process::exit(1);
            }
        };

        let src_path = file.src_path();
        let outcome = inserter.process_page(&src_path, &content);

        // With --out every file is mirrored; in place only changed files are touched.
        let target: Option<PathBuf> = match args.out {
            Some(ref out) => Some(out.join(&file.relative_path)),
            None if outcome.changed() => Some(file.absolute_path.clone()),
            None => None,
        };

        if let Some(ref target) = target {
            if let Err(e) = write_file(target, &outcome.content) {
                eprintln!("Error writing {}: {}", target.display(), e);
                std::process::exit(1);
            }
        }

        reports.push(FileReport::new(src_path, outcome.action, target.is_some()));
    }

    let modified = reports.iter().filter(|r| r.modified).count();
    tracing::info!("Processed {} files, {} modified", reports.len(), modified);

    if args.json {
        let report = BuildReport {
            docs_dir: walker.root().display().to_string(),
            files: reports,
            modified,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
    } else if reports.is_empty() {
        println!("(no markdown files found)");
    } else {
        let total = reports.len();
        let table = Table::new(&reports).with(Style::rounded()).to_string();
        println!("{}", table);
        println!("\nTotal: {} files, {} modified", total, modified);
    }
    crate::logging::flush();
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
