// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Env | Which | Exec
//!
//! The log guard lives in the ProcessExit handler: it is dropped when
//! dispatch returns, or just before `exec` exits with the child's code.
//! ```

use std::io::Write;
use std::process::ExitCode;

use shellops::cli::{self, Command};
use shellops::cmd::config::{build_config_loader, run_inis_command, run_options_command};
use shellops::cmd::shell::{run_env_command, run_exec_command, run_which_command};
use shellops::config::Config;
use shellops::logging::{LogConfig, init_logging};
use shellops::shell::ShellOps;
use shellops::shell::exit::ProcessExit;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, ProcessExit::flushing(log_guard))
}

fn load_config(cli: &cli::Cli) -> shellops::error::Result<Config> {
    build_config_loader(&cli.global)?.build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config, exit: ProcessExit) -> ExitCode {
    let mut out = std::io::stdout().lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(anyhow::Error::from)
        }
        Some(Command::Options) => run_options_command(config, &mut out),
        Some(Command::Inis) => build_config_loader(&cli.global)
            .and_then(|loader| run_inis_command(&loader.format_loaded_files(), &mut out)),
        Some(Command::Env(args)) => ShellOps::from_config_with_exit(config, exit)
            .and_then(|ops| run_env_command(args, &ops, &mut out)),
        Some(Command::Which(args)) => ShellOps::from_config_with_exit(config, exit)
            .and_then(|ops| run_which_command(args, &ops, &mut out)),
        Some(Command::Exec(args)) => ShellOps::from_config_with_exit(config, exit)
            .and_then(|ops| run_exec_command(args, &ops, &mut out)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
