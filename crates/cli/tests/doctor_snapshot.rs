use assert_cmd::prelude::*;
use insta::assert_snapshot;
use regex::Regex;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn normalize(s: &str) -> String {
    let path = Regex::new(r"(?m)^path: .*$").unwrap();
    let stub = Regex::new(r"(?m)^blog-excerpts-core v.*$").unwrap();
    let s = path.replace(s, "path: <CFG>");
    stub.replace(&s, "<VERSION>").to_string()
}

#[test]
fn doctor_snapshot_with_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
docs_dir = "/tmp/site/docs"

[excerpts]
max_lines = 5
use_frontmatter_excerpt = false
"#;
    fs::write(&cfg, toml).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdexcerpt"));
    let output = cmd.args(["--config", cfg.to_str().unwrap(), "doctor"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_snapshot!(normalize(&stdout));
}
