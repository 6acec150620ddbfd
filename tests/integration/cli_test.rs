//! End-to-end tests for the adp command line.

use predicates::prelude::*;

use super::helpers::{adp, temp_script, VALID_SCRIPT_TOML};

#[test]
fn help_lists_subcommands() {
    adp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn version_flag_prints_version() {
    adp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("adp"));
}

#[test]
fn play_refuses_without_a_tty() {
    // assert_cmd pipes stdio, so stdout is never a TTY here.
    let (_dir, path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    adp()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn check_accepts_a_valid_script() {
    let (_dir, path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("2 sequences"))
        .stdout(predicate::str::contains("3 output lines"));
}

#[test]
fn check_reports_loop_duration() {
    // One 3-char command, one 100ms line:
    // 3*40 + 400 + 100 + 8000 = 8620ms -> "8.6s".
    let script = r#"
[[sequences]]
command = "run"

[[sequences.outputs]]
text = "A"
delay_ms = 100
"#;
    let (_dir, path) = temp_script("timed.toml", script);
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("8.6s"));
}

#[test]
fn check_rejects_an_empty_catalog() {
    let (_dir, path) = temp_script("empty.toml", "sequences = []\n");
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequences"));
}

#[test]
fn check_rejects_an_empty_command() {
    let script = r#"
[[sequences]]
command = ""
"#;
    let (_dir, path) = temp_script("blank.toml", script);
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty command"));
}

#[test]
fn check_rejects_a_missing_file() {
    adp()
        .arg("check")
        .arg("/nonexistent/demo.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid script"));
}

#[test]
fn check_accepts_json_scripts() {
    let script = r#"{
        "sequences": [
            {"command": "agent go", "outputs": [{"text": "ok", "style": "success"}]}
        ]
    }"#;
    let (_dir, path) = temp_script("demo.json", script);
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 sequences"));
}

#[test]
fn check_rejects_unknown_extensions() {
    let (_dir, path) = temp_script("demo.yaml", "sequences: []");
    adp()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported script format"));
}

#[test]
fn unknown_theme_fails_before_the_tui_starts() {
    let (_dir, path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    adp()
        .arg(&path)
        .arg("--theme")
        .arg("neon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn completions_mention_the_binary() {
    adp()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("adp"));
}
