//! Script loading tests against real files on disk.

use adp::script::{DemoScript, LineStyle, ScriptError};
use adp::sequencer::timing;

use super::helpers::{temp_script, VALID_SCRIPT_TOML};

#[test]
fn toml_script_round_trips_through_load() {
    let (_dir, path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    let script = DemoScript::load(&path).unwrap();

    assert_eq!(script.len(), 2);
    assert_eq!(script.sequences[0].command, "agent fix");
    assert_eq!(script.sequences[0].outputs[0].style, LineStyle::Info);
    assert_eq!(script.sequences[0].outputs[1].delay_ms, 150);
    // Omitted delay falls back to the default.
    assert_eq!(script.sequences[1].outputs[0].delay_ms, 300);
}

#[test]
fn json_script_loads_equivalently() {
    let json = r#"{
        "sequences": [
            {
                "command": "agent fix",
                "outputs": [
                    {"text": "scanning", "style": "info"},
                    {"text": "done", "delay_ms": 150, "style": "success"}
                ]
            },
            {
                "command": "agent test",
                "outputs": [{"text": "42 passed", "style": "success"}]
            }
        ]
    }"#;
    let (_dir, toml_path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    let (_dir2, json_path) = temp_script("demo.json", json);

    let from_toml = DemoScript::load(&toml_path).unwrap();
    let from_json = DemoScript::load(&json_path).unwrap();
    assert_eq!(from_toml, from_json);
}

#[test]
fn validation_failures_surface_from_load() {
    let (_dir, path) = temp_script("empty.toml", "sequences = []\n");
    assert!(matches!(
        DemoScript::load(&path),
        Err(ScriptError::EmptyCatalog)
    ));
}

#[test]
fn full_pass_duration_matches_the_loaded_script() {
    let (_dir, path) = temp_script("demo.toml", VALID_SCRIPT_TOML);
    let script = DemoScript::load(&path).unwrap();

    // seq 0: 9*40 + 400 + 300 + 150 + 8000 = 9210ms
    // seq 1: 10*40 + 400 + 300 + 8000 = 9100ms
    let expected = std::time::Duration::from_millis(9_210 + 9_100);
    assert_eq!(timing::full_pass(&script), expected);
}
