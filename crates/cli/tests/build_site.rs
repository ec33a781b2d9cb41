use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn create_docs(root: &Path) {
    fs::create_dir_all(root.join("blog/posts")).unwrap();
    fs::write(root.join("index.md"), "# Home\n\nWelcome.\n").unwrap();
    fs::write(root.join("blog/posts/first.md"), "---\ntitle: First\n---\nHello.\n").unwrap();
    fs::write(
        root.join("blog/posts/second.md"),
        "Intro.\n\n<!-- more -->\n\nRest.\n",
    )
    .unwrap();
}

fn mdexcerpt(xdg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdexcerpt"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd
}

#[test]
fn build_mirrors_docs_into_out_dir() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    let out = tmp.path().join("out");
    create_docs(&docs);

    mdexcerpt(tmp.path())
        .args(["build", "--docs-dir", docs.to_str().unwrap(), "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3 files, 1 modified"));

    assert_eq!(
        fs::read_to_string(out.join("blog/posts/first.md")).unwrap(),
        "---\ntitle: First\n---\nHello.\n\n<!-- more -->\n"
    );
    assert_eq!(fs::read_to_string(out.join("index.md")).unwrap(), "# Home\n\nWelcome.\n");
    assert_eq!(
        fs::read_to_string(out.join("blog/posts/second.md")).unwrap(),
        "Intro.\n\n<!-- more -->\n\nRest.\n"
    );

    // sources untouched
    assert_eq!(
        fs::read_to_string(docs.join("blog/posts/first.md")).unwrap(),
        "---\ntitle: First\n---\nHello.\n"
    );
}

#[test]
fn build_in_place_touches_only_posts() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_docs(&docs);

    mdexcerpt(tmp.path())
        .args(["build", "--docs-dir", docs.to_str().unwrap()])
        .assert()
        .success();

    assert!(fs::read_to_string(docs.join("blog/posts/first.md"))
        .unwrap()
        .ends_with("Hello.\n\n<!-- more -->\n"));
    assert_eq!(fs::read_to_string(docs.join("index.md")).unwrap(), "# Home\n\nWelcome.\n");
}

#[test]
fn build_json_report() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_docs(&docs);

    let output = mdexcerpt(tmp.path())
        .args(["build", "--docs-dir", docs.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["modified"], 1);

    let files = report["files"].as_array().unwrap();
    let actions: Vec<(&str, &str)> = files
        .iter()
        .map(|f| (f["path"].as_str().unwrap(), f["action"].as_str().unwrap()))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("blog/posts/first.md", "appended"),
            ("blog/posts/second.md", "separator-present"),
            ("index.md", "not-eligible"),
        ]
    );
    assert_eq!(files[0]["content_lines"], 1);
}

#[test]
fn build_uses_docs_dir_from_config() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_docs(&docs);
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\ndocs_dir = \"{}\"\n[excerpts]\nenabled = false\n", docs.display()),
    )
    .unwrap();

    mdexcerpt(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "build", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"modified\": 0"));
}

#[test]
fn build_without_docs_dir_fails() {
    let tmp = tempdir().unwrap();

    mdexcerpt(tmp.path())
        .arg("build")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No docs directory"));
}
