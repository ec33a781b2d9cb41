mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdexcerpt",
    version,
    about = "Insert read-more separators into Markdown blog posts"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Process a single Markdown file
    Process(ProcessArgs),

    /// Process every Markdown file under the docs directory
    Build(BuildArgs),
}

/// Per-invocation overrides of the `[excerpts]` settings.
#[derive(Debug, Args, Default)]
pub struct OverrideArgs {
    /// Content lines before the separator (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub max_lines: Option<i64>,

    /// Separator marker (overrides config)
    #[arg(long)]
    pub separator: Option<String>,

    /// Log placement decisions at info level
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Markdown file to process
    pub file: PathBuf,

    /// Path used to decide whether the file is a blog post
    /// (defaults to FILE as given, e.g. "blog/posts/hello.md")
    #[arg(long)]
    pub src_path: Option<String>,

    /// Rewrite the file instead of printing to stdout
    #[arg(long)]
    pub in_place: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Docs directory (defaults to `docs_dir` from config)
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Write results under this directory instead of rewriting in place
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
        Commands::Process(args) => cmd::process::run(cli.config.as_deref(), &args),
        Commands::Build(args) => cmd::build::run(cli.config.as_deref(), &args),
    }
}
