//! CLI behavior tests: exit codes, output formats, init, catalogue listings.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_PROJECT: &str = "test-repos/sample-project";

fn assessor_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_frontend-assessor"));
    cmd.env_remove("FRONTEND_ASSESSOR_LANG");
    cmd
}

fn assess_cmd() -> Command {
    let mut cmd = assessor_cmd();
    cmd.arg("assess").arg(SAMPLE_PROJECT).arg("--no-color");
    cmd
}

#[test]
fn no_args_returns_error_not_panic() {
    assessor_cmd().assert().failure().code(2);
}

#[test]
fn console_report_exit_0() {
    assess_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontend Code Assessment Report"))
        .stdout(predicate::str::contains("Overall score:"))
        .stdout(predicate::str::contains("Code Quality"))
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn verbose_lists_files() {
    assess_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/utils/api.js"))
        .stdout(predicate::str::contains("[CQ003]"));
}

#[test]
fn below_threshold_exit_1() {
    assess_cmd()
        .args(["--threshold", "101"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below the threshold"));
}

#[test]
fn above_threshold_exit_0() {
    assess_cmd().args(["--threshold", "0"]).assert().success();
}

#[test]
fn threshold_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.js"), "export const app = 1;\n").unwrap();
    fs::write(
        dir.path().join("frontend-assessor.config.json"),
        r#"{ "threshold": 101 }"#,
    )
    .unwrap();
    assessor_cmd()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_project_exit_2() {
    assessor_cmd()
        .args(["assess", "test-repos/does-not-exist"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project path not found"));
}

#[test]
fn invalid_pattern_exit_2() {
    assess_cmd()
        .args(["--include", "src/["])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

#[test]
fn invalid_config_exit_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("frontend-assessor.config.json"), "{ not json").unwrap();
    assessor_cmd()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON in config"));
}

#[test]
fn unknown_framework_is_rejected() {
    assess_cmd().args(["-f", "ember"]).assert().failure().code(2);
}

#[test]
fn json_report_written_to_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("report.txt");
    assess_cmd()
        .args(["-o", "json", "-p"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score").not());

    let written = dir.path().join("report.json");
    let s = fs::read_to_string(&written).expect("json report written");
    let parsed: serde_json::Value = serde_json::from_str(&s).expect("valid JSON");
    assert_eq!(parsed["meta"]["tool"], "frontend-assessor");
    assert_eq!(parsed["statistics"]["totalFiles"], 3);
}

#[test]
fn all_formats_write_both_files() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("out");
    assess_cmd()
        .args(["-o", "all", "-p"])
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score"));

    let html = fs::read_to_string(dir.path().join("out.html")).expect("html report");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("const DATA="));
    assert!(dir.path().join("out.json").is_file());
}

#[test]
fn default_report_name_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let project = std::env::current_dir().unwrap().join(SAMPLE_PROJECT);
    assessor_cmd()
        .current_dir(dir.path())
        .arg("assess")
        .arg(&project)
        .args(["-o", "html"])
        .assert()
        .success();
    assert!(dir.path().join("frontend-assessment-report.html").is_file());
}

#[test]
fn lang_flag_localizes_output() {
    assess_cmd()
        .args(["--lang", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Общая оценка"))
        .stdout(predicate::str::contains("Качество кода"));
}

#[test]
fn lang_from_environment() {
    assess_cmd()
        .env("FRONTEND_ASSESSOR_LANG", "ua")
        .assert()
        .success()
        .stdout(predicate::str::contains("Загальна оцінка"));
}

#[test]
fn unknown_lang_falls_back_to_english() {
    assess_cmd()
        .args(["--lang", "xx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score"))
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    assessor_cmd()
        .args(["init", "-f", "react", "--dir"])
        .arg(dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("frontend-assessor.config.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["framework"], "react");
    assert!(parsed["includePatterns"].is_array());
    assert!(parsed["excludePatterns"].is_array());
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("frontend-assessor.config.json");
    fs::write(&config, "{\"threshold\": 42}").unwrap();
    assessor_cmd()
        .args(["init", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config).unwrap(), "{\"threshold\": 42}");
}

#[test]
fn rules_lists_catalogue() {
    assessor_cmd()
        .arg("rules")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("CQ001"))
        .stdout(predicate::str::contains("PERF006"))
        .stdout(predicate::str::contains("MAINT006"));
}

#[test]
fn rules_filtered_by_category() {
    assessor_cmd()
        .args(["rules", "-c", "best-practices"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("BP003"))
        .stdout(predicate::str::contains("CQ001").not());
}

#[test]
fn rules_unknown_category_exit_2() {
    assessor_cmd()
        .args(["rules", "-c", "style"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn levels_show_gates() {
    assessor_cmd()
        .arg("levels")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior"))
        .stdout(predicate::str::contains("overall >= 85"))
        .stdout(predicate::str::contains("overall >= 75"));
}

#[test]
fn lang_lists_supported_languages() {
    assessor_cmd()
        .arg("lang")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Русский"))
        .stdout(predicate::str::contains("Українська"));
}
