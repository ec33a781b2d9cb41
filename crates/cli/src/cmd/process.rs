//! Process command implementation.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::ProcessArgs;

pub fn run(config: Option<&Path>, args: &ProcessArgs) {
    let rc = super::load_config(config, "process", args.overrides.verbose);
    let inserter = super::build_inserter(&rc, &args.overrides);

    let content = match fs::read_to_string(&args.file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let src_path =
        args.src_path.clone().unwrap_or_else(|| args.file.to_string_lossy().into_owned());
    let outcome = inserter.process_page(&src_path, &content);
    tracing::debug!("{}: {}", src_path, outcome.action);

    if args.in_place {
        if outcome.changed() {
            if let Err(e) = fs::write(&args.file, &outcome.content) {
                eprintln!("Error writing {}: {}", args.file.display(), e);
                std::process::exit(1);
            }
        }
        println!("{}: {}", args.file.display(), outcome.action);
    } else {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(outcome.content.as_bytes()).and_then(|()| stdout.flush())
        {
            eprintln!("Error writing output: {e}");
            std::process::exit(1);
        }
    }
    crate::logging::flush();
}
