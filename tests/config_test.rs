mod common;

use common::TriageTest;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let triage = TriageTest::new();

    let output = triage.run_success(&["config", "show"]);
    assert!(output.contains("backend_url"));
    assert!(output.contains("request_timeout"));
    assert!(output.contains("30"));
}

#[test]
fn test_config_set_persists_file() {
    let triage = TriageTest::new();
    assert!(!triage.config_exists());

    triage.run_success(&["config", "set", "backend_url", "http://tickets.internal/api"]);
    assert!(triage.config_exists());
    assert!(triage.read_config().contains("http://tickets.internal/api"));
}

#[test]
fn test_config_get_after_set() {
    let triage = TriageTest::new();

    triage.run_success(&["config", "set", "request_timeout", "5"]);
    let output = triage.run_success(&["config", "get", "request_timeout"]);
    assert_eq!(output.trim(), "5");
}

#[test]
fn test_config_set_unknown_key() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "nope", "value"]);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_set_invalid_timeout() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "request_timeout", "soon"]);
    assert!(stderr.contains("request_timeout"));
}

#[test]
fn test_config_get_unknown_key() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "get", "nope"]);
    assert!(stderr.contains("unknown key"));
}
