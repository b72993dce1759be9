// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command handlers.
//!
//! Parses realistic command lines and runs the handlers against in-memory
//! output buffers.

use std::sync::Arc;

use clap::Parser;
use shellops::cli::{Cli, Command};
use shellops::cmd::config::{build_config_loader, run_inis_command, run_options_command};
use shellops::cmd::shell::{run_env_command, run_exec_command, run_which_command};
use shellops::core::env::EnvironmentBuilder;
use shellops::shell::ShellOps;
use shellops::shell::exit::{ExitHandler, RecordingExit};

fn ops_with_recorder(local_bin: &str) -> (ShellOps, Arc<RecordingExit>) {
    let recorder = Arc::new(RecordingExit::new());
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new(local_bin))
        .with_exit_handler(Box::new(Arc::clone(&recorder)) as Box<dyn ExitHandler>)
        .build();
    (ops, recorder)
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("shellops").chain(args.iter().copied())).unwrap()
}

// =============================================================================
// Exec Command
// =============================================================================

#[test]
fn cli_exec_prints_output() {
    let cli = parse(&["exec", "echo", "from-cli"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec");
    };
    let (ops, recorder) = ops_with_recorder("/project/node_modules/.bin");

    let mut out = Vec::new();
    run_exec_command(&args, &ops, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.trim(), "from-cli");
    assert!(recorder.codes().is_empty());
}

#[test]
fn cli_exec_silent_prints_nothing() {
    let cli = parse(&["exec", "--silent", "echo", "hidden"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec");
    };
    let (ops, recorder) = ops_with_recorder("/project/node_modules/.bin");

    let mut out = Vec::new();
    run_exec_command(&args, &ops, &mut out).unwrap();

    assert!(out.is_empty());
    assert!(recorder.codes().is_empty());
}

#[test]
fn cli_exec_failure_exits_with_child_code() {
    let cli = parse(&["exec", "exit", "7"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec");
    };
    let (ops, recorder) = ops_with_recorder("/project/node_modules/.bin");

    let mut out = Vec::new();
    run_exec_command(&args, &ops, &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(recorder.codes(), vec![7]);
}

#[cfg(unix)]
#[test]
fn cli_exec_killed_child_exits_with_one() {
    let cli = parse(&["exec", "kill -9 $$"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec");
    };
    let (ops, recorder) = ops_with_recorder("/project/node_modules/.bin");

    run_exec_command(&args, &ops, &mut Vec::new()).unwrap();

    assert_eq!(recorder.last(), Some(1));
}

// =============================================================================
// Env Command
// =============================================================================

#[test]
fn cli_env_json_for_windows() {
    let cli = parse(&["env", "--platform", "win32", "--json"]);
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env");
    };
    let (ops, _) = ops_with_recorder("C:\\proj\\node_modules\\.bin");

    let mut out = Vec::new();
    run_env_command(&args, &ops, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let map = json.as_object().unwrap();
    let (_, path) = map
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("PATH"))
        .expect("PATH present");
    assert!(
        path.as_str().unwrap().starts_with("C:\\proj\\node_modules\\.bin"),
        "unexpected PATH: {path}"
    );
}

#[cfg(unix)]
#[test]
fn cli_env_plain_lines() {
    let cli = parse(&["env", "--platform", "linux"]);
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env");
    };
    let (ops, _) = ops_with_recorder("/project/node_modules/.bin");

    let mut out = Vec::new();
    run_env_command(&args, &ops, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let path_line = text
        .lines()
        .find(|l| l.starts_with("PATH="))
        .expect("PATH line");
    assert!(path_line.starts_with("PATH=/project/node_modules/.bin"));
}

// =============================================================================
// Which Command
// =============================================================================

#[test]
fn cli_which_missing_program_fails() {
    let cli = parse(&["which", "shellops-no-such-tool-98765"]);
    let Some(Command::Which(args)) = cli.command else {
        panic!("expected which");
    };
    let (ops, _) = ops_with_recorder("/project/node_modules/.bin");

    let err = run_which_command(&args, &ops, &mut Vec::new()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'shellops-no-such-tool-98765' (not in PATH)"
    );
}

#[cfg(unix)]
#[test]
fn cli_which_prints_local_tool() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let tool = dir.path().join("shellops-cli-tool");
    std::fs::write(&tool, "#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let cli = parse(&["which", "shellops-cli-tool"]);
    let Some(Command::Which(args)) = cli.command else {
        panic!("expected which");
    };
    let ops = ShellOps::builder()
        .with_environment(EnvironmentBuilder::new(dir.path()))
        .build();

    let mut out = Vec::new();
    run_which_command(&args, &ops, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap().trim_end(), tool.display().to_string());
}

// =============================================================================
// Config Commands
// =============================================================================

#[test]
fn cli_options_lists_overrides() {
    let cli = parse(&[
        "--no-default-inis",
        "-b",
        "/opt/tools",
        "-s",
        "shell/encoding=oem",
        "options",
    ]);
    let config = build_config_loader(&cli.global).unwrap().build().unwrap();

    let mut out = Vec::new();
    run_options_command(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().any(|l| l.starts_with("shell.encoding") && l.ends_with("= oem")));
    assert!(
        text.lines()
            .any(|l| l.starts_with("paths.local_bin") && l.ends_with("/opt/tools"))
    );
}

#[test]
fn cli_bad_set_option_is_rejected() {
    let cli = parse(&["-s", "encoding=oem", "options"]);
    let err = build_config_loader(&cli.global).err().expect("invalid override");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid option override 'encoding=oem' (expected 'section/key=value')"
    );
}

#[test]
fn cli_inis_lists_files() {
    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("extra.toml");
    std::fs::write(&ini, "[shell]\ncapture_stderr = true\n").unwrap();

    let cli = parse(&["--no-default-inis", "-i", ini.to_str().unwrap(), "inis"]);
    let loader = build_config_loader(&cli.global).unwrap();

    let mut out = Vec::new();
    run_inis_command(&loader.format_loaded_files(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("1. [file] {}\n", ini.display()));
}

#[test]
fn cli_inis_empty() {
    let mut out = Vec::new();
    run_inis_command(&[], &mut out).unwrap();
    insta::assert_snapshot!(
        String::from_utf8(out).unwrap().trim_end(),
        @"No configuration files loaded"
    );
}
