// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands that run through [`ShellOps`].

use std::io::Write;

use tracing::debug;

use crate::cli::shell::{EnvArgs, ExecArgs, WhichArgs};
use crate::error::{ProcessError, Result};
use crate::shell::ShellOps;

/// Prints the environment a command would be started with.
///
/// Plain output is one `NAME=value` line per variable, sorted by name.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn run_env_command(args: &EnvArgs, ops: &ShellOps, out: &mut impl Write) -> Result<()> {
    let env = ops.modified_env(args.platform, None);
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &env)?;
        writeln!(out)?;
    } else {
        for (name, value) in env.iter() {
            writeln!(out, "{name}={value}")?;
        }
    }
    Ok(())
}

/// Prints the path `program` resolves to.
///
/// # Errors
///
/// Returns an error if the program is not found or writing fails.
pub fn run_which_command(args: &WhichArgs, ops: &ShellOps, out: &mut impl Write) -> Result<()> {
    let path = ops
        .which(&args.program)
        .ok_or_else(|| ProcessError::ExecutableNotFound {
            name: args.program.clone(),
        })?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Runs a command line, printing its output unless `--silent` is given.
///
/// A command that exits unsuccessfully ends the process through
/// [`ShellOps::exit`] with the child's exit code, after its error has been
/// reported on stderr.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or its output cannot be
/// read or written.
pub fn run_exec_command(args: &ExecArgs, ops: &ShellOps, out: &mut impl Write) -> Result<()> {
    let command = args.command_line();
    let result = if args.silent {
        ops.exec_silent(&command).map(|output| {
            debug!(bytes = output.len(), "discarding output");
        })
    } else {
        ops.exec_to(&command, out)
    };

    match result {
        Ok(()) => Ok(()),
        Err(ProcessError::CommandFailed(failure)) => {
            eprintln!("Error: {failure}");
            ops.exit(failure.exit_code());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
