// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_batterytech"))
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("json stdout")
}

#[test]
fn help_lists_every_command() {
    let output = cli().arg("--help").output().expect("run help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8 help");
    for command in ["batteries", "compare", "units", "timeline", "quiz", "validate"] {
        assert!(text.contains(command), "help is missing {command}");
    }
}

#[test]
fn missing_command_is_a_usage_error() {
    let output = cli().output().expect("run bare");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn battery_list_in_json_has_the_four_chemistries() {
    let output = cli()
        .args(["--json", "batteries", "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let rows = stdout_json(&output);
    let ids = rows
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["id"].as_str().expect("id").to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 4);
    assert!(ids.contains(&"lithium-ion".to_string()));
}

#[test]
fn show_prints_the_battery_sections() {
    let output = cli()
        .args(["batteries", "show", "lithium-ion"])
        .output()
        .expect("run show");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("Lithium-Ion Battery"));
    assert!(text.contains("Energy Density (Wh/kg)"));
    assert!(text.contains("Advantages"));
}

#[test]
fn unknown_battery_exits_with_not_found() {
    let output = cli()
        .args(["--json", "batteries", "show", "not-a-real-id"])
        .output()
        .expect("run show");
    assert_eq!(output.status.code(), Some(3));
    let err: Value = serde_json::from_slice(&output.stderr).expect("json stderr");
    assert_eq!(err["code"], "not_found");
}

#[test]
fn compare_reports_rows_in_requested_order() {
    let output = cli()
        .args(["compare", "lead-acid,lithium-ion", "--json"])
        .output()
        .expect("run compare");
    assert!(output.status.success());
    let payload = stdout_json(&output);
    let rows = payload["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 8);
    let first = rows[0]["values"].as_array().expect("cells");
    assert_eq!(first[0]["battery_id"], "lead-acid");
    assert_eq!(first[1]["battery_id"], "lithium-ion");
    assert_eq!(payload["batteries"][1]["key"], "battery2");
    assert!(payload["chart"][0].get("battery1").is_some());
}

#[test]
fn compare_rejects_more_than_three_ids() {
    let output = cli()
        .args(["compare", "a,b,c,d"])
        .output()
        .expect("run compare");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn compare_with_only_unknown_ids_is_not_found() {
    let output = cli()
        .args(["compare", "nope,also-nope"])
        .output()
        .expect("run compare");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn units_and_timeline_render() {
    let units = cli().args(["--json", "units"]).output().expect("units");
    assert!(units.status.success());
    assert_eq!(stdout_json(&units).as_array().map(Vec::len), Some(5));

    let timeline = cli().arg("timeline").output().expect("timeline");
    assert!(timeline.status.success());
    let text = String::from_utf8(timeline.stdout).expect("utf8");
    assert!(text.contains("1800"));
}

#[test]
fn validate_accepts_embedded_content() {
    let output = cli().arg("validate").output().expect("validate");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.starts_with("content validation: OK"));
}

#[test]
fn validate_rejects_broken_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    for file in ["batteries.json", "quizzes.json", "units.json", "timeline.json"] {
        std::fs::write(dir.path().join(file), "[]").expect("write");
    }
    std::fs::write(dir.path().join("batteries.json"), "{ not json").expect("write");
    let output = cli()
        .args(["validate", "--data-dir"])
        .arg(dir.path())
        .output()
        .expect("validate");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn quiz_rejects_non_numeric_unit() {
    let output = cli().args(["quiz", "abc"]).output().expect("quiz");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn quiz_unknown_unit_is_not_found() {
    let output = cli().args(["quiz", "9"]).output().expect("quiz");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn quiz_runs_to_completion_from_stdin() {
    let output = cli()
        .args(["quiz", "1", "--seed", "3"])
        .write_stdin("1\n1\n1\n")
        .output()
        .expect("quiz");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("Question 1 of 3"));
    assert!(text.contains("Quiz complete: "));
}

#[test]
fn quiz_json_report_goes_to_stdout() {
    let output = cli()
        .args(["--json", "quiz", "2", "--seed", "7", "--size", "2"])
        .write_stdin("1\n2\n")
        .output()
        .expect("quiz");
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["unit"], 2);
    assert_eq!(report["total"], 2);
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Question 2 of 2"));
}

#[test]
fn battery_list_filters_by_type() {
    let output = cli()
        .args(["--json", "batteries", "list", "--type", "secondary"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let ids: Vec<String> = stdout_json(&output)
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["id"].as_str().expect("id").to_string())
        .collect();
    assert_eq!(ids, vec!["lithium-ion", "lead-acid"]);

    let fuel = cli()
        .args(["batteries", "list", "--type", "fuel-cell"])
        .output()
        .expect("run list");
    let text = String::from_utf8(fuel.stdout).expect("utf8");
    assert!(text.contains("pem-fuel-cell"));
    assert!(!text.contains("lead-acid"));
}

#[test]
fn battery_list_rejects_unknown_type() {
    let output = cli()
        .args(["batteries", "list", "--type", "nuclear"])
        .output()
        .expect("run list");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn compare_shows_applications_and_pros_cons() {
    let output = cli()
        .args(["compare", "zinc-carbon,lithium-ion"])
        .output()
        .expect("run compare");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("Applications"));
    assert!(text.contains("Pros & Cons"));

    let json_out = cli()
        .args(["--json", "compare", "zinc-carbon,lithium-ion"])
        .output()
        .expect("run compare");
    let payload = stdout_json(&json_out);
    let columns = payload["applications"].as_array().expect("applications");
    assert_eq!(columns[0]["battery_id"], "zinc-carbon");
    assert_eq!(columns[1]["battery_id"], "lithium-ion");
    assert!(payload["pros_cons"][0]["advantages"]
        .as_array()
        .is_some_and(|a| !a.is_empty()));
}
