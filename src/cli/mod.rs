// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for shellops using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! shellops [global options] <command>
//! version
//! options
//! inis
//! env [--platform ID] [--json]
//! which <program>
//! exec [--silent] <command...>
//! ```

pub mod global;
pub mod shell;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::shell::{EnvArgs, ExecArgs, WhichArgs};
use clap::{Parser, Subcommand};

/// Shell operations for build tooling.
///
/// Runs commands with project-local executables (`node_modules/.bin`) first
/// on the search path.
#[derive(Debug, Parser)]
#[command(
    name = "shellops",
    author,
    version,
    about = "Shell operations for build tooling",
    long_about = "shellops Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs shell commands with the project's local bin directory\n\
                  prepended to PATH, so locally installed tools win over global\n\
                  ones. `shellops exec -- eslint src` runs the project's eslint.\n\
                  See `shellops <command> --help` for more information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, shellops loads `shellops.toml` from the current\n\
                  directory if it exists. Additional files can be specified with\n\
                  --ini, those are loaded afterwards and override it. Use\n\
                  --no-default-inis to only use --ini. SHELLOPS_<SECTION>__<KEY>\n\
                  environment variables and --set override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the INIs used by shellops.
    Inis,

    /// Prints the environment commands are run with.
    Env(EnvArgs),

    /// Shows which executable a command name resolves to.
    Which(WhichArgs),

    /// Runs a shell command.
    Exec(ExecArgs),
}

/// Parses the process arguments, exiting with usage on error.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
