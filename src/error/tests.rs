// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CommandExecutionError, ConfigError, ProcessError};

fn failure(code: Option<i32>, signal: Option<i32>) -> CommandExecutionError {
    CommandExecutionError {
        command: "make lint".to_string(),
        code,
        signal,
        stdout: "partial".to_string(),
        stderr: String::new(),
    }
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "local_bin".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'local_bin' in section '[paths]'");
}

#[test]
fn test_command_failure_display() {
    insta::assert_snapshot!(
        failure(Some(2), None).to_string(),
        @"command 'make lint' exited with code 2"
    );
    insta::assert_snapshot!(
        failure(None, Some(9)).to_string(),
        @"command 'make lint' was terminated by signal 9"
    );
}

#[test]
fn test_process_error_is_transparent_for_command_failure() {
    let err = ProcessError::from(failure(Some(3), None));
    assert_eq!(err.to_string(), "command 'make lint' exited with code 3");
    let inner = err.as_command_failure().expect("should be a command failure");
    assert_eq!(inner.stdout, "partial");
    assert_eq!(inner.exit_code(), 3);
}

#[test]
fn test_signal_exit_code_falls_back_to_one() {
    assert_eq!(failure(None, Some(15)).exit_code(), 1);
}

#[test]
fn test_process_error_size() {
    let size = std::mem::size_of::<ProcessError>();
    assert!(size <= 128, "ProcessError is {size} bytes, expected <= 128");
}
