//! Robot-mode end-to-end tests.

use serde_json::json;

use crate::common::cli::CliRunner;
use crate::common::init_test_logging;

#[test]
fn robot_quick_start_outputs_json() {
    init_test_logging();
    let result = CliRunner::new().run(&["--robot"]);
    result
        .assert_success()
        .assert_json_field("/tool", &json!("colorsvc"));

    let json = result.json();
    assert!(json.get("commands").is_some());
    assert!(json.get("output_modes").is_some());
}

#[test]
fn version_outputs_json() {
    init_test_logging();
    let result = CliRunner::new().run(&["version", "--format=json"]);
    result.assert_success();
    assert!(result.json().get("version").is_some());
}

#[test]
fn config_outputs_defaults() {
    init_test_logging();
    CliRunner::new()
        .run_robot(&["config"])
        .assert_success()
        .assert_json_field("/color", &json!(""))
        .assert_json_field("/port", &json!(8080))
        .assert_json_field("/bind", &json!("127.0.0.1"));
}

#[test]
fn missing_config_file_reports_hint() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&["--config", "/nonexistent/colorsvc.toml", "config"]);
    result.assert_failure();

    let error: serde_json::Value =
        serde_json::from_str(result.stderr.trim()).expect("JSON error on stderr");
    assert_eq!(error["recoverable"], json!(true));
    assert!(error["suggestion"].is_string());
}

#[test]
fn unknown_command_fails() {
    init_test_logging();
    CliRunner::new().run(&["nonexistent-command"]).assert_failure();
}
