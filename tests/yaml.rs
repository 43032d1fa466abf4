use std::path::{Path, PathBuf};

use brailler::check_yaml::{TestResult, check_yaml};

fn yaml_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/yaml")
        .join(name)
}

fn failures(name: &str) -> Vec<TestResult> {
    check_yaml(&yaml_file(name))
        .unwrap()
        .into_iter()
        .filter(|r| r.is_failure() || r.is_unexpected_success())
        .collect()
}

#[test]
fn basic() {
    assert_eq!(failures("basic.yaml"), vec![]);
}

#[test]
fn punctuation() {
    assert_eq!(failures("punctuation.yaml"), vec![]);
}

#[test]
fn sentences() {
    assert_eq!(failures("sentences.yaml"), vec![]);
}

#[test]
fn lossy() {
    let results = check_yaml(&yaml_file("lossy.yaml")).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(TestResult::is_expected_failure));
}

#[test]
fn missing_file() {
    assert!(check_yaml(&yaml_file("does-not-exist.yaml")).is_err());
}
