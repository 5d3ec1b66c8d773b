use std::error::Error;

use errand::errors::ErrandError;
use errand::exec::{CaptureMode, ExecRequest, FailurePolicy, run};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn zero_exit_succeeds_under_every_policy() -> TestResult {
    for policy in [
        FailurePolicy::Exit,
        FailurePolicy::Warn,
        FailurePolicy::Raise,
        FailurePolicy::Silent,
    ] {
        let outcome = run(&ExecRequest::new("exit 0").on_failure(policy))?;
        assert!(outcome.succeeded, "policy {policy:?}");
        assert_eq!(outcome.status, Some(0));
        assert!(outcome.stdout_lines.is_none());
        assert!(outcome.stderr_lines.is_none());
    }
    Ok(())
}

#[test]
fn silent_policy_swallows_nonzero_exit() -> TestResult {
    let request = ExecRequest::new("exit 3")
        .capture(CaptureMode::StdoutAndStderr)
        .on_failure(FailurePolicy::Silent);
    let outcome = run(&request)?;
    assert!(!outcome.succeeded);
    assert_eq!(outcome.status, Some(3));
    assert_eq!(outcome.stdout_lines, Some(vec![]));
    assert_eq!(outcome.stderr_lines, Some(vec![]));
    Ok(())
}

#[test]
fn warn_policy_reports_but_returns_the_outcome() -> TestResult {
    let outcome = run(&ExecRequest::new("exit 1").on_failure(FailurePolicy::Warn))?;
    assert!(!outcome.succeeded);
    assert_eq!(outcome.status, Some(1));
    Ok(())
}

#[test]
fn raise_policy_returns_the_typed_error() {
    let request = ExecRequest::new("exit 2").on_failure(FailurePolicy::Raise);
    match run(&request) {
        Err(ErrandError::CommandFailed { command, status }) => {
            assert_eq!(command, "exit 2");
            assert_eq!(status, Some(2));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn stdout_only_capture_leaves_stderr_alone() -> TestResult {
    let request = ExecRequest::new("echo hello")
        .capture(CaptureMode::Stdout)
        .on_failure(FailurePolicy::Raise);
    let outcome = run(&request)?;
    assert!(outcome.succeeded);
    assert_eq!(outcome.stdout_lines, Some(vec!["hello".to_string()]));
    assert!(outcome.stderr_lines.is_none());
    Ok(())
}

#[cfg(unix)]
#[test]
fn captures_stdout_and_stderr_separately() -> TestResult {
    let request = ExecRequest::new("echo X && echo Y 1>&2")
        .capture(CaptureMode::StdoutAndStderr)
        .on_failure(FailurePolicy::Raise);
    let outcome = run(&request)?;
    assert!(outcome.succeeded);
    assert_eq!(outcome.stdout_lines, Some(vec!["X".to_string()]));
    assert_eq!(outcome.stderr_lines, Some(vec!["Y".to_string()]));
    Ok(())
}

// Enough output on both streams to overflow a pipe buffer if either
// were left undrained while the other blocks.
#[cfg(unix)]
#[test]
fn drains_chatty_children_without_truncation() -> TestResult {
    let script = "i=0; while [ $i -lt 5000 ]; do echo out$i; echo err$i 1>&2; i=$((i+1)); done";
    let request = ExecRequest::new(script)
        .capture(CaptureMode::StdoutAndStderr)
        .on_failure(FailurePolicy::Raise);
    let outcome = run(&request)?;
    let stdout = outcome.stdout_lines.unwrap_or_default();
    let stderr = outcome.stderr_lines.unwrap_or_default();
    assert_eq!(stdout.len(), 5000);
    assert_eq!(stderr.len(), 5000);
    assert_eq!(stdout.first().map(String::as_str), Some("out0"));
    assert_eq!(stderr.last().map(String::as_str), Some("err4999"));
    Ok(())
}

#[test]
fn invalid_spellings_are_configuration_errors() {
    assert!(matches!(
        "abort".parse::<FailurePolicy>(),
        Err(ErrandError::InvalidPolicy(_))
    ));
    assert!(matches!(
        "everything".parse::<CaptureMode>(),
        Err(ErrandError::InvalidCapture(_))
    ));
}
