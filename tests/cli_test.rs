use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use inkmd_lib::exit_codes::{SUCCESS, TOOL_ERROR};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn inkmd() -> Command {
    cargo_bin_cmd!("inkmd")
}

/// Temp dir that is its own project root so discovery never leaves it
fn project_dir() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

#[test]
fn test_render_stdin() {
    let dir = project_dir();
    inkmd()
        .current_dir(dir.path())
        .arg("render")
        .write_stdin("# Hello\n\nSome **bold** text.")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains("<h1>"))
        .stdout(predicate::str::contains("bold</strong>"));
}

#[test]
fn test_render_files_in_order() {
    let dir = project_dir();
    fs::write(dir.path().join("a.md"), "first").unwrap();
    fs::write(dir.path().join("b.md"), "second").unwrap();

    let output = inkmd()
        .current_dir(dir.path())
        .args(["render", "a.md", "b.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("first").unwrap() < stdout.find("second").unwrap());
    assert_eq!(stdout.matches("<p ").count(), 2);
}

#[test]
fn test_render_to_output_file() {
    let dir = project_dir();
    fs::write(dir.path().join("post.md"), "- a\n- b").unwrap();

    inkmd()
        .current_dir(dir.path())
        .args(["render", "post.md", "-o", "post.html"])
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(dir.path().join("post.html")).unwrap();
    assert_eq!(html.matches("<li ").count(), 2);
    assert!(html.ends_with("</ul>\n"));
}

#[test]
fn test_base_level_flag_overrides_config() {
    let dir = project_dir();
    fs::write(
        dir.path().join("inkmd.toml"),
        "[render]\nbase-level = 2\n\n[theme.headings.h2]\nclass = \"two\"\n\n[theme.headings.h4]\nclass = \"four\"\n",
    )
    .unwrap();

    inkmd()
        .current_dir(dir.path())
        .arg("render")
        .write_stdin("# Title")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains(r#"<h1><span class="two">Title</span></h1>"#));

    inkmd()
        .current_dir(dir.path())
        .args(["render", "--base-level", "4"])
        .write_stdin("# Title")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains(r#"<h1><span class="four">Title</span></h1>"#));
}

#[test]
fn test_no_config_ignores_project_file() {
    let dir = project_dir();
    fs::write(dir.path().join("inkmd.toml"), "[theme]\nparagraph = \"custom\"\n").unwrap();

    inkmd()
        .current_dir(dir.path())
        .args(["render", "--no-config"])
        .write_stdin("text")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains("custom").not());
}

#[test]
fn test_rust_log_raises_default_level() {
    let dir = project_dir();
    inkmd()
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .arg("render")
        .write_stdin("x")
        .assert()
        .code(SUCCESS)
        .stderr(predicate::str::contains("[inkmd-config]"));

    inkmd()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("render")
        .write_stdin("x")
        .assert()
        .code(SUCCESS)
        .stderr(predicate::str::contains("[inkmd-config]").not());
}

#[test]
fn test_missing_input_file_is_tool_error() {
    let dir = project_dir();
    inkmd()
        .current_dir(dir.path())
        .args(["--color", "never", "render", "missing.md"])
        .assert()
        .code(TOOL_ERROR)
        .stderr(predicate::str::contains("missing.md"));
}

#[test]
fn test_invalid_config_is_tool_error() {
    let dir = project_dir();
    fs::write(dir.path().join("inkmd.toml"), "[render\n").unwrap();

    inkmd()
        .current_dir(dir.path())
        .args(["--color", "never", "render"])
        .write_stdin("x")
        .assert()
        .code(TOOL_ERROR)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_init_then_config() {
    let dir = project_dir();

    inkmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains("inkmd.toml"));
    assert!(dir.path().join("inkmd.toml").exists());

    inkmd().current_dir(dir.path()).arg("init").assert().code(TOOL_ERROR);
    inkmd().current_dir(dir.path()).args(["init", "--force"]).assert().code(SUCCESS);

    inkmd()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .code(SUCCESS)
        .stdout(predicate::str::contains("base-level = 1"))
        .stdout(predicate::str::contains("inkmd.toml"));
}

#[test]
fn test_schema_is_json() {
    let output = inkmd().arg("schema").output().unwrap();
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema.get("properties").is_some());
}
