//! Replay scripts loaded from disk.

use regform::config::Config;
use regform::form::RegistrationForm;
use regform::gate::FormStatus;
use regform::replay::{self, ReplayScript};
use std::fs;
use tempfile::TempDir;

const ERROR_COUNT_SCRIPT: &str = r#"
- input: email
  value: www
  expect:
    errors: 1
    error_fields: [email]
- input: password
  value: "123"
  expect:
    errors: 2
- input: confirm_password
  value: "1233"
  expect:
    errors: 3
- input: tax_id
  value: "123456"
  expect:
    errors: 4
    value: "123-456"
    error_fields: [email, password, confirm_password, tax_id]
"#;

const HAPPY_PATH_SCRIPT: &str = r#"
- input: email
  value: www@ww.pl
- input: password
  value: ZAQ!1qaz
- input: confirm_password
  value: ZAQ!1qaz
- input: tax_id
  value: "1234567890"
  expect:
    value: 123-456-78-90
    status: incomplete
- select: Administrator
  expect:
    status: submittable
    submittable: true
    errors: 0
- clear: email
  expect:
    status: incomplete
    submittable: false
"#;

fn write_script(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}

#[test]
fn test_error_count_script_passes() {
    let tmp = TempDir::new().unwrap();
    let path = write_script(&tmp, "errors.yaml", ERROR_COUNT_SCRIPT);

    let script = ReplayScript::load_from(&path).unwrap();
    let mut form = RegistrationForm::default();
    let outcome = replay::run(&mut form, &script).unwrap();

    for report in &outcome.steps {
        assert!(report.passed(), "step {}: {:?}", report.step, report.mismatches);
    }
    assert!(outcome.passed);
}

#[test]
fn test_happy_path_script_passes() {
    let tmp = TempDir::new().unwrap();
    let path = write_script(&tmp, "happy.yaml", HAPPY_PATH_SCRIPT);

    let script = ReplayScript::load_from(&path).unwrap();
    let mut form = RegistrationForm::default();
    let outcome = replay::run(&mut form, &script).unwrap();

    assert!(outcome.passed);
    assert_eq!(outcome.steps.len(), 6);
    assert_eq!(outcome.steps[4].snapshot.status, FormStatus::Submittable);
    assert_eq!(outcome.steps[5].snapshot.status, FormStatus::Incomplete);
}

#[test]
fn test_script_under_stricter_config_fails_expectations() {
    let tmp = TempDir::new().unwrap();
    let script_path = write_script(&tmp, "happy.yaml", HAPPY_PATH_SCRIPT);
    let config_path = tmp.path().join("config.md");
    fs::write(&config_path, "---\nphone:\n  required: true\n---\n").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let script = ReplayScript::load_from(&script_path).unwrap();
    let mut form = RegistrationForm::from_config(&config);
    let outcome = replay::run(&mut form, &script).unwrap();

    assert!(!outcome.passed);
    let failed: Vec<usize> = outcome
        .steps
        .iter()
        .filter(|r| !r.passed())
        .map(|r| r.step)
        .collect();
    assert_eq!(failed, vec![5]);
}

#[test]
fn test_outcome_serializes_to_json() {
    let script = ReplayScript::parse("- input: phone\n  value: \"45354\"\n").unwrap();
    let mut form = RegistrationForm::default();
    let outcome = replay::run(&mut form, &script).unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["steps"][0]["field"], "phone");
    assert_eq!(json["steps"][0]["snapshot"]["values"]["phone"], "453 54");
    assert_eq!(json["steps"][0]["snapshot"]["errors"][0]["reason"], "malformed_shape");
}

#[test]
fn test_missing_script_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = ReplayScript::load_from(&tmp.path().join("nope.yaml"));
    assert!(result.is_err());
}
