//! End-to-end tests for the rippy binary.
//!
//! These tests verify that rendered RST lands on stdout, logs stay on
//! stderr, and failures map to stable exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the rippy binary.
fn rippy() -> Command {
    let mut cmd = Command::cargo_bin("rippy").expect("rippy binary should exist");
    cmd.env_remove("RUST_LOG")
        .env_remove("RIPPY_LOG")
        .env_remove("RIPPY_LOG_FORMAT");
    cmd
}

const FOO_JSON: &str =
    r#"{"title": "Foo", "anchor_text": "xxx-foo", "headers": ["One", "Two", "Three"]}"#;

// ============================================================================
// Success Paths
// ============================================================================

mod render {
    use super::*;

    #[test]
    fn test_stdin_json() {
        rippy()
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(".. _xxx-foo:\n\nFoo\n===\n\n"))
            .stdout(predicate::str::contains("=".repeat(19)));
    }

    #[test]
    fn test_empty_spec_prints_none() {
        rippy()
            .arg("-")
            .write_stdin("{}")
            .assert()
            .success()
            .stdout("None\n\n");
    }

    #[test]
    fn test_files_render_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.toml");
        fs::write(&first, r#"{"title": "Alpha", "rows": [["1"]]}"#).unwrap();
        fs::write(&second, "title = \"Beta\"\nrows = [[\"2\"]]\n").unwrap();

        let output = rippy().arg(&first).arg(&second).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let alpha = stdout.find("Alpha").unwrap();
        let beta = stdout.find("Beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("table.rst");
        rippy()
            .args(["--title", "Override", "-o"])
            .arg(&out)
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with(".. _xxx-foo:\n\nOverride\n========\n\n"));
    }

    #[test]
    fn test_forced_toml_on_stdin() {
        rippy()
            .args(["--input-format", "toml"])
            .write_stdin("title = \"T\"\nheaders = [\"h\"]\n")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("T\n=\n\n"));
    }

    #[test]
    fn test_jsonl_logs_go_to_stderr() {
        rippy()
            .args(["--log-format", "jsonl", "-v"])
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(predicate::str::contains("{").not())
            .stderr(predicate::str::contains("Rendered tables"));
    }
}

// ============================================================================
// Logging
// ============================================================================

mod logging {
    use super::*;

    fn foo_rst() -> String {
        rippy_table::Document::from_json_str(FOO_JSON)
            .unwrap()
            .render()
    }

    #[test]
    fn test_rust_log_beats_log_level_flag() {
        rippy()
            .env("RUST_LOG", "debug")
            .args(["--log-level", "error"])
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(foo_rst())
            .stderr(predicate::str::contains("DEBUG"))
            .stderr(predicate::str::contains("Recomputed column widths"))
            .stderr(predicate::str::contains("filter=debug"));
    }

    #[test]
    fn test_rippy_log_env_sets_level() {
        rippy()
            .env("RIPPY_LOG", "debug")
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(foo_rst())
            .stderr(predicate::str::contains("Recomputed column widths"));
    }

    #[test]
    fn test_log_level_flag_beats_rippy_log() {
        rippy()
            .env("RIPPY_LOG", "debug")
            .args(["--log-level", "error"])
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(foo_rst())
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_quiet_silences_rippy_log() {
        rippy()
            .env("RIPPY_LOG", "debug")
            .arg("-q")
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(foo_rst())
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_default_level_is_quiet_on_success() {
        rippy()
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stdout(foo_rst())
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_log_timestamps() {
        rippy()
            .args(["-v", "--log-timestamps"])
            .write_stdin(FOO_JSON)
            .assert()
            .success()
            .stderr(
                predicate::str::is_match(r"(?m)^\d{4}-\d{2}-\d{2}T.*Rendered tables").unwrap(),
            );
    }
}

// ============================================================================
// Failure Paths
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_malformed_json_exit_code() {
        rippy()
            .write_stdin("{not json")
            .assert()
            .code(13)
            .stderr(predicate::str::contains("<stdin>: JSON error"));
    }

    #[test]
    fn test_invalid_spec_exit_code() {
        rippy()
            .write_stdin(r#"{"anchor_text": "orphan"}"#)
            .assert()
            .code(10)
            .stderr(predicate::str::contains("anchor_text requires a title"));
    }

    #[test]
    fn test_empty_title_override_keeps_anchor_rule() {
        rippy()
            .args(["--title", ""])
            .write_stdin(FOO_JSON)
            .assert()
            .code(10)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("anchor_text requires a title"));
    }

    #[test]
    fn test_json_array_is_invalid_spec() {
        rippy()
            .write_stdin(r#"["Foo", null, 3, ["a"], []]"#)
            .assert()
            .code(10)
            .stderr(predicate::str::contains("expected a JSON object"));
    }

    #[test]
    fn test_unsupported_extension_exit_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.yaml");
        fs::write(&path, "title: x\n").unwrap();
        rippy()
            .arg(&path)
            .assert()
            .code(10)
            .stderr(predicate::str::contains("unsupported input format: yaml"));
    }

    #[test]
    fn test_missing_file_exit_code() {
        let dir = TempDir::new().unwrap();
        rippy()
            .arg(dir.path().join("absent.json"))
            .assert()
            .code(12);
    }

    #[test]
    fn test_unknown_flag_exit_code() {
        rippy()
            .arg("--no-such-flag")
            .assert()
            .code(10)
            .stderr(predicate::str::contains("--no-such-flag"));
    }

    #[test]
    fn test_help_is_success() {
        rippy()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--input-format"));
    }
}
