//! `colorsvc pick` resolves exactly like the endpoint.

use serde_json::json;

use crate::common::cli::CliRunner;
use crate::common::init_test_logging;

const SIX: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];

#[test]
fn pick_prints_a_json_string() {
    init_test_logging();
    let result = CliRunner::new().run(&["pick"]);
    result.assert_success();

    let first_line = result.stdout.lines().next().unwrap_or_default();
    let quoted = first_line.split_whitespace().next().unwrap_or_default();
    let color: String = serde_json::from_str(quoted).expect("JSON string on stdout");
    assert!(SIX.contains(&color.as_str()), "unexpected color {color}");
}

#[test]
fn pick_uses_first_parameter() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&[
        "pick",
        "--params",
        r#"[{"color":"red","delayLength":0},{"color":"blue","delayLength":0}]"#,
    ]);

    result
        .assert_success()
        .assert_json_field("/color", &json!("red"))
        .assert_json_field("/origin", &json!("parameters"))
        .assert_json_field("/status", &json!(200))
        .assert_json_field("/body", &json!("\"red\""));
}

#[test]
fn pick_blue_reports_500() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&["pick", "--params", r#"[{"color":"blue"}]"#]);

    result
        .assert_success()
        .assert_json_field("/color", &json!("blue"))
        .assert_json_field("/status", &json!(500));
}

#[test]
fn pick_rejects_malformed_params() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&["pick", "--params", "[{\"color\": red"]);
    result.assert_failure();

    let error: serde_json::Value =
        serde_json::from_str(result.stderr.trim()).expect("JSON error on stderr");
    assert_eq!(error["error"], json!(true));
    assert!(
        error["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Error decoding JSON")),
        "{error}"
    );
}

#[test]
fn pick_text_mode_flags_sentinel() {
    init_test_logging();
    let result = CliRunner::new()
        .with_env("COLOR", "blue")
        .run(&["--no-color", "pick"]);

    result
        .assert_success()
        .assert_stdout_contains("\"blue\"")
        .assert_stdout_contains("500");
}
