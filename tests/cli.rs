//! Runs the mdmirror binary end to end

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn mdmirror(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdmirror"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run mdmirror")
}

#[test]
fn test_default_roots_and_summary() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("sources/guide")).unwrap();
    fs::write(
        temp_dir.path().join("sources/guide/get_started.md"),
        "---\nslug: /intro\n---\nHello",
    )
    .unwrap();
    fs::write(temp_dir.path().join("sources/guide/notes.txt"), "skip").unwrap();

    let output = mdmirror(temp_dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "1 Markdown file(s) copied from sources to build to be accessible from the website"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("build/guide/intro.md")).unwrap(),
        "---\nslug: /intro\n---\nHello"
    );
    assert!(!temp_dir.path().join("build/guide/notes.txt").exists());
}

#[test]
fn test_missing_source_root_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = mdmirror(temp_dir.path(), &["--source", "absent"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Source directory not found: absent"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!temp_dir.path().join("build").exists());
}

#[test]
fn test_dry_run_summary() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("docs")).unwrap();
    fs::write(temp_dir.path().join("docs/a_b.md"), "x").unwrap();

    let output = mdmirror(temp_dir.path(), &["-s", "docs", "-d", "out", "--dry-run"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "1 Markdown file(s) would be copied from docs to out to be accessible from the website"
    );
    assert!(!temp_dir.path().join("out").exists());
}
