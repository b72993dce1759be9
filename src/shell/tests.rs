// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use super::ShellOps;
use super::exit::{ExitHandler, RecordingExit};
use crate::core::env::EnvironmentBuilder;
use crate::core::env::container::{Env, PATH_VAR};
use crate::core::env::types::Platform;

fn ops() -> ShellOps {
    ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("/project/node_modules/.bin"))
        .build()
}

#[test]
fn test_exec_silent_returns_stdout() {
    let output = ops().exec_silent("echo hello").expect("echo should succeed");
    assert_eq!(output.trim_end(), "hello");
    assert!(output.ends_with('\n'));
}

#[test]
fn test_exec_silent_failure_carries_code() {
    let err = ops().exec_silent("exit 1").expect_err("exit 1 should fail");
    let failure = err.as_command_failure().expect("should be a command failure");
    assert_eq!(failure.code, Some(1));
    assert_eq!(failure.exit_code(), 1);
}

#[test]
fn test_exec_to_appends_newline() {
    let mut out = Vec::new();
    ops().exec_to("echo hi", &mut out).expect("echo should succeed");

    let text = String::from_utf8(out).expect("utf-8 output");
    #[cfg(not(windows))]
    assert_eq!(text, "hi\n\n");
    #[cfg(windows)]
    assert_eq!(text, "hi\r\n\n");
}

#[test]
fn test_exec_to_writes_nothing_on_failure() {
    let mut out = Vec::new();
    let result = ops().exec_to("exit 2", &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[cfg(unix)]
#[test]
fn test_exec_silent_sees_local_bin() {
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("/project/node_modules/.bin"))
        .build();

    let output = ops.exec_silent("echo \"$PATH\"").expect("echo should succeed");
    assert!(
        output.starts_with("/project/node_modules/.bin:"),
        "unexpected PATH: {output}"
    );
}

#[cfg(unix)]
#[test]
fn test_exec_silent_uses_cwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("here.txt"), "x").expect("write marker");

    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("/project/node_modules/.bin"))
        .with_cwd(dir.path())
        .build();

    let output = ops.exec_silent("ls").expect("ls should succeed");
    assert!(output.contains("here.txt"));
}

#[cfg(unix)]
#[test]
fn test_capture_stderr_keeps_it_in_failure() {
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("/project/node_modules/.bin"))
        .with_capture_stderr(true)
        .build();

    let err = ops
        .exec_silent("echo broken >&2; exit 5")
        .expect_err("exit 5 should fail");
    let failure = err.as_command_failure().expect("should be a command failure");
    assert_eq!(failure.stderr, "broken\n");
    assert_eq!(failure.code, Some(5));
}

#[test]
fn test_modified_env_uses_platform_override() {
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("C:\\proj\\node_modules\\.bin"))
        .with_platform(Platform::Windows)
        .build();
    let source = Env::from_vars(Platform::Linux, [("Path", "C:\\Windows")]);

    let env = ops.modified_env(None, Some(&source));
    assert_eq!(env.platform(), Platform::Windows);
    assert_eq!(env.search_path_key(), "Path");
    assert_eq!(
        env.get("Path"),
        Some("C:\\proj\\node_modules\\.bin;C:\\Windows")
    );
    assert_eq!(env.get(PATH_VAR), None);

    let env = ops.modified_env(Some(Platform::Linux), Some(&source));
    assert_eq!(env.get("Path"), Some("C:\\Windows"));
    assert_eq!(env.get(PATH_VAR), Some("C:\\proj\\node_modules\\.bin"));
}

#[cfg(unix)]
#[test]
fn test_which_prefers_local_bin() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let tool = dir.path().join("shellops-local-tool");
    std::fs::write(&tool, "#!/bin/sh\necho local\n").expect("write tool");
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new(dir.path()))
        .build();

    assert_eq!(ops.which("shellops-local-tool"), Some(tool));
    assert_eq!(
        ops.exec_silent("shellops-local-tool").expect("tool should run"),
        "local\n"
    );
    assert!(ops.which("shellops-missing-tool-12345").is_none());
}

#[test]
fn test_exit_routes_to_handler() {
    let recorder = Arc::new(RecordingExit::new());
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new("/project/node_modules/.bin"))
        .with_exit_handler(Box::new(Arc::clone(&recorder)) as Box<dyn ExitHandler>)
        .build();

    ops.exit(3);
    ops.exit(0);

    assert_eq!(recorder.codes(), vec![3, 0]);
    assert_eq!(recorder.last(), Some(0));
}

#[cfg(unix)]
#[test]
fn test_platform_override_does_not_reach_subprocesses() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let tool = dir.path().join("shellops-override-tool");
    std::fs::write(&tool, "#!/bin/sh\necho found\n").expect("write tool");
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new(dir.path()))
        .with_platform(Platform::Windows)
        .build();

    let path = ops.exec_silent("echo \"$PATH\"").expect("echo should succeed");
    assert!(
        path.starts_with(&format!("{}:", dir.path().display())),
        "child PATH should use the host separator: {path}"
    );
    assert_eq!(ops.which("shellops-override-tool"), Some(tool));
    assert_eq!(
        ops.exec_silent("shellops-override-tool").expect("tool should run"),
        "found\n"
    );

    let env = ops.modified_env(None, None);
    assert_eq!(env.platform(), Platform::Windows);
}

#[test]
fn test_process_exit_release_flushes_file_log() {
    use super::exit::ProcessExit;
    use crate::logging::{LogConfig, LogLevel, build_subscriber};

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exit.log");
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_file_level(LogLevel::INFO)
        .with_log_file(path.clone())
        .build();

    let (subscriber, guard) = build_subscriber(&config).expect("subscriber should build");
    let exit = ProcessExit::flushing(guard);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("written before exit");
    });

    exit.release();
    exit.release();

    let contents = std::fs::read_to_string(&path).expect("log file should exist");
    assert!(contents.contains("written before exit"), "{contents}");
}
