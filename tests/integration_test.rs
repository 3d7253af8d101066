// file: tests/integration_test.rs
// version: 1.0.0
// guid: 0c7e51a4-9b5d-4f3e-8a21-6d4f0e9b7c13

//! Integration tests running real processes

#![cfg(unix)]

mod common;

use common::FakeSudo;
use configure_with_sudo::{
    CommandRunner, ElevationConfig, ExecuteOptions, ExecutionError, OutputEncoding,
};

fn fake_elevation(sudo: &FakeSudo) -> ElevationConfig {
    ElevationConfig {
        executable: sudo.path().to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_echo_captures_output_and_marks_configured() {
    let mut runner = CommandRunner::new(["echo", "hi"]);

    let out = runner.execute(ExecuteOptions::capture()).unwrap();

    assert_eq!(out, Some(vec!["hi".to_string()]));
    assert!(runner.is_configured());
}

#[test]
fn test_false_fails_and_still_marks_configured() {
    let mut runner = CommandRunner::new(["false"]);

    let err = runner.execute(ExecuteOptions::default()).unwrap_err();

    assert!(matches!(err, ExecutionError::Exit { code: Some(1), .. }));
    assert!(runner.is_configured());
}

#[test]
fn test_run_splits_captured_lines() {
    let runner = CommandRunner::new(["printf", "a\\nb\\n"]);
    let out = runner.run(None, true, OutputEncoding::default()).unwrap();
    assert_eq!(out, Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn test_missing_executable_is_a_spawn_error() {
    let mut runner = CommandRunner::new(["/nonexistent/configure-me"]);
    let err = runner.execute(ExecuteOptions::capture()).unwrap_err();
    assert!(matches!(err, ExecutionError::Spawn { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_elevated_run_through_fake_sudo() {
    let sudo = FakeSudo::new();
    let mut runner = CommandRunner::new(["echo", "hi"])
        .use_elevation(true)
        .with_elevation(ElevationConfig {
            user: "alice".to_string(),
            ..fake_elevation(&sudo)
        });

    let out = runner
        .execute(ExecuteOptions::capture().set_home(true))
        .unwrap();

    assert_eq!(out, Some(vec!["hi".to_string()]));
    assert_eq!(sudo.calls(), ["-H -u alice echo hi", "-K"]);
}

#[test]
fn test_credential_revoked_once_after_failure() {
    let sudo = FakeSudo::new();
    let mut runner = CommandRunner::new(["false"])
        .use_elevation(true)
        .with_elevation(fake_elevation(&sudo));

    assert!(runner.execute(ExecuteOptions::default()).is_err());
    assert_eq!(sudo.revocations(), 1);
}

#[test]
fn test_credential_kept_when_revocation_disabled() {
    let sudo = FakeSudo::new();
    let mut runner = CommandRunner::new(["true"])
        .use_elevation(true)
        .with_elevation(ElevationConfig {
            revoke_credential: false,
            ..fake_elevation(&sudo)
        });

    runner.execute(ExecuteOptions::default()).unwrap();
    assert_eq!(sudo.calls(), ["true"]);
}

#[test]
fn test_failed_revocation_fails_the_run() {
    let sudo = FakeSudo::with_revoke_status(1);
    let runner = CommandRunner::new(["true"]).with_elevation(fake_elevation(&sudo));

    let err = runner
        .run_elevated(false, None, OutputEncoding::default())
        .unwrap_err();

    assert!(matches!(err, ExecutionError::Revoke(_)));
    assert!(err.revocation_failed());
}

#[test]
fn test_second_execute_launches_nothing() {
    let sudo = FakeSudo::new();
    let mut runner = CommandRunner::new(["true"])
        .use_elevation(true)
        .with_elevation(fake_elevation(&sudo));

    runner.execute(ExecuteOptions::default()).unwrap();
    assert_eq!(runner.execute(ExecuteOptions::capture()).unwrap(), None);

    assert_eq!(sudo.calls(), ["true", "-K"]);
}
