//! Shared helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// A valid two-sequence demo script in TOML form.
pub const VALID_SCRIPT_TOML: &str = r#"
[[sequences]]
command = "agent fix"

[[sequences.outputs]]
text = "scanning"
style = "info"

[[sequences.outputs]]
text = "done"
delay_ms = 150
style = "success"

[[sequences]]
command = "agent test"

[[sequences.outputs]]
text = "42 passed"
style = "success"
"#;

/// Write `content` to `name` inside a fresh temp dir, returning both so
/// the dir outlives the test body.
pub fn temp_script(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    (dir, path)
}

/// The adp binary under test.
pub fn adp() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("adp").expect("adp binary should build")
}
