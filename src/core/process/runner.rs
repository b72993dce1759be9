// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run_blocking()  --> current-thread runtime --> block_on(run())
//!
//! run()
//!   build_command()   args, raw args, cwd, env, stdio
//!         |
//!         v
//!     spawn()  --> SpawnFailed
//!         |
//!         v
//!   collect_output()  --> Io
//!         |
//!         v
//!   exit code != 0 / signal --> CommandFailed(CommandExecutionError)
//!         |
//!         v
//!   ProcessOutput { exit_code, signal, stdout, stderr }
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{Capture, ProcessBuilder, ProcessOutput};
use crate::error::{CommandExecutionError, ProcessError, ProcessResult};

impl ProcessBuilder {
    /// The label if one was set, otherwise the program's file stem.
    fn display_name(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        self.program
            .file_stem()
            .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// Program and arguments as one line, for logs and spawn errors.
    fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            if arg.contains(' ') {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        for arg in &self.raw_args {
            let _ = write!(line, " {arg}");
        }
        line
    }

    /// Spawns the child and waits for it to finish.
    ///
    /// # Errors
    ///
    /// - `SpawnFailed` if the child cannot be started.
    /// - `Io` if waiting for it or reading its output fails.
    /// - `CommandFailed` if it exits non-zero or is killed by a signal. The
    ///   error carries whatever output was captured.
    pub async fn run(self) -> ProcessResult<ProcessOutput> {
        let name = self.display_name();
        let line = self.command_line();

        if let Some(cwd) = &self.cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %line, "exec");

        let child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self
            .collect_output(&name, child)
            .await
            .map_err(|source| ProcessError::Io {
                command: line,
                source,
            })?;

        if output.success() {
            trace!(process = %name, "completed");
            return Ok(output);
        }

        if !output.stderr.is_empty() {
            error!(process = %name, stderr = %output.stderr, "command wrote to stderr");
        }
        Err(CommandExecutionError {
            command: name,
            code: output.exit_code,
            signal: output.signal,
            stdout: output.stdout,
            stderr: output.stderr,
        }
        .into())
    }

    /// Blocking form of [`run`](Self::run).
    ///
    /// Each call drives `run` on its own current-thread runtime, so this must
    /// not be called from inside an async runtime.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run), plus `Io` if the runtime cannot be created.
    pub fn run_blocking(self) -> ProcessResult<ProcessOutput> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| ProcessError::Io {
                command: self.command_line(),
                source,
            })?;
        runtime.block_on(self.run())
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        #[cfg(windows)]
        for arg in &self.raw_args {
            command.raw_arg(arg);
        }

        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        if let Some(env) = &self.env {
            command.env_clear().envs(env.iter());
        }

        command
            .stdin(Stdio::null())
            .stdout(self.stdio_for(Capture::STDOUT))
            .stderr(self.stdio_for(Capture::STDERR))
            .kill_on_drop(true);
        command
    }

    fn stdio_for(&self, stream: Capture) -> Stdio {
        if self.capture.contains(stream) {
            Stdio::piped()
        } else {
            Stdio::inherit()
        }
    }
}
