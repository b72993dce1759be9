// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::core::env::types::Platform;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["shellops", "version"]).expect("valid args");
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["shellops"]).expect("valid args");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "shellops",
        "-l",
        "5",
        "-b",
        "tools/bin",
        "-i",
        "a.toml",
        "--ini",
        "b.toml",
        "-s",
        "shell/encoding=oem",
        "options",
    ])
    .expect("valid args");

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.local_bin, Some(PathBuf::from("tools/bin")));
    assert_eq!(
        cli.global.inis,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["shellops", "-l", "7", "version"]).is_err());
}

#[test]
fn test_to_config_overrides() {
    let cli = Cli::try_parse_from([
        "shellops",
        "-s",
        "shell/capture_stderr=true",
        "-l",
        "4",
        "--log-file",
        "out.log",
        "-b",
        "bin",
        "version",
    ])
    .expect("valid args");

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "shell/capture_stderr=true",
            "global/output_log_level=4",
            "global/file_log_level=4",
            "global/log_file=out.log",
            "paths/local_bin=bin",
        ]
    );
}

#[test]
fn test_file_log_level_wins_over_log_level() {
    let cli = Cli::try_parse_from(["shellops", "-l", "2", "--file-log-level", "6", "version"])
        .expect("valid args");

    assert_eq!(
        cli.global.to_config_overrides(),
        ["global/output_log_level=2", "global/file_log_level=6"]
    );
}

#[test]
fn test_parse_env() {
    let cli = Cli::try_parse_from(["shellops", "env", "--platform", "win32", "--json"])
        .expect("valid args");

    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert_eq!(args.platform, Some(Platform::Windows));
    assert!(args.json);
}

#[test]
fn test_parse_which() {
    let cli = Cli::try_parse_from(["shellops", "which", "eslint"]).expect("valid args");

    let Some(Command::Which(args)) = cli.command else {
        panic!("expected which command");
    };
    assert_eq!(args.program, "eslint");
}

#[test]
fn test_parse_exec_trailing_args() {
    let cli = Cli::try_parse_from(["shellops", "exec", "eslint", "--fix", "src"])
        .expect("valid args");

    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert!(!args.silent);
    assert_eq!(args.command_line(), "eslint --fix src");
}

#[test]
fn test_parse_exec_silent() {
    let cli = Cli::try_parse_from(["shellops", "exec", "--silent", "--", "npm", "test"])
        .expect("valid args");

    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert!(args.silent);
    assert_eq!(args.command_line(), "npm test");
}

#[test]
fn test_exec_requires_command() {
    assert!(Cli::try_parse_from(["shellops", "exec"]).is_err());
}
