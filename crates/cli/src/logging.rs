//! Log sinks for the CLI.
//!
//! Placement decisions are emitted by the core library at `info` when
//! `[excerpts] verbose` is set. Verbose mode therefore lifts the core's
//! target to `info` on every sink, whatever the general `[logging]` level.

use blog_excerpts_core::config::ResolvedConfig;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Target of the library's diagnostics.
const CORE_TARGET: &str = "blog_excerpts_core";

static FILE_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let verbose = cfg.excerpts.verbose;
    let level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter_for(level, verbose));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.logging.file else {
        registry.init();
        return;
    };

    let file_level = cfg
        .logging
        .file_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(level);

    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = FILE_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_for(file_level, verbose));

    registry.with(file_layer).init();
}

/// Flush the file logger before the process exits.
pub fn flush() {
    if let Ok(mut g) = FILE_GUARD.lock() {
        g.take();
    }
}

/// `RUST_LOG` (if set) over `level`, plus the core target at `info` when
/// verbose and `level` would hide it.
fn filter_for(level: LevelFilter, verbose: bool) -> EnvFilter {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    match verbose_directive(level, verbose) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

fn verbose_directive(level: LevelFilter, verbose: bool) -> Option<Directive> {
    if !verbose || level >= LevelFilter::INFO {
        return None;
    }
    format!("{CORE_TARGET}=info").parse().ok()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
