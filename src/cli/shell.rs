// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `env`, `which` and `exec` commands.

use clap::Args;

use crate::core::env::types::Platform;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Platform whose conventions apply (win32, linux, darwin, ...).
    #[arg(short = 'p', long = "platform", value_name = "ID")]
    pub platform: Option<Platform>,

    /// Prints the environment as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `which` command.
#[derive(Debug, Clone, Args)]
pub struct WhichArgs {
    /// Program name to look up.
    #[arg(value_name = "PROGRAM")]
    pub program: String,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Discards the command's output instead of printing it.
    #[arg(long)]
    pub silent: bool,

    /// Command line, joined with spaces and passed to the shell.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl ExecArgs {
    /// The command line as handed to the shell.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}
