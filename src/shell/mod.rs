// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell operations facade used by build and test tooling.
//!
//! ```text
//! ShellOps
//!   modified_env(platform?, source?) --> EnvironmentBuilder::build
//!   exec_silent(cmd) --> fresh host Env --> ProcessBuilder::shell --> stdout
//!   exec(cmd)        --> exec_silent + println
//!   which(program)   --> lookup on the host PATH, local bin first
//!   exit(code)       --> ExitHandler (ProcessExit | RecordingExit)
//! ```

pub mod exit;

#[cfg(test)]
mod tests;

use bon::Builder;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::env::EnvironmentBuilder;
use crate::core::env::container::Env;
use crate::core::env::types::Platform;
use crate::core::process::builder::{Capture, ProcessBuilder, ProcessOutput};
use crate::error::{ProcessError, ProcessResult, Result};
use crate::utility::encoding::Encoding;

use exit::{ExitHandler, ProcessExit};

/// Runs shell commands with project-local executables on the search path.
///
/// Every command gets its own freshly built environment. Nothing is cached
/// between calls.
///
/// # Example
///
/// ```no_run
/// use shellops::core::env::EnvironmentBuilder;
/// use shellops::shell::ShellOps;
///
/// let ops = ShellOps::builder()
///     .with_environment(EnvironmentBuilder::new("node_modules/.bin"))
///     .build();
///
/// let version = ops.exec_silent("eslint --version")?;
/// ops.exec("npm test")?;
/// # Ok::<(), shellops::error::ProcessError>(())
/// ```
#[derive(Debug, Builder)]
pub struct ShellOps {
    #[builder(setters(name = with_environment))]
    environment: EnvironmentBuilder,
    /// Working directory override; commands inherit the current one otherwise.
    #[builder(setters(name = with_cwd), into)]
    cwd: Option<PathBuf>,
    /// Platform override for [`modified_env`](Self::modified_env) only.
    /// Subprocesses always get the host layout.
    #[builder(setters(name = with_platform))]
    platform: Option<Platform>,
    #[builder(setters(name = with_encoding), default)]
    encoding: Encoding,
    #[builder(setters(name = with_capture_stderr), default = false)]
    capture_stderr: bool,
    #[builder(
        setters(name = with_exit_handler),
        default = Box::new(ProcessExit::new()) as Box<dyn ExitHandler>
    )]
    exit_handler: Box<dyn ExitHandler>,
}

impl ShellOps {
    /// Creates a `ShellOps` from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.local_bin` has not been resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_exit(config, ProcessExit::new())
    }

    /// Like [`from_config`](Self::from_config), exiting through `exit_handler`.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.local_bin` has not been resolved.
    pub fn from_config_with_exit(
        config: &Config,
        exit_handler: impl ExitHandler + 'static,
    ) -> Result<Self> {
        Ok(Self::builder()
            .with_environment(EnvironmentBuilder::new(config.paths.local_bin()?))
            .maybe_with_cwd(config.shell.cwd.clone())
            .maybe_with_platform(config.shell.platform)
            .with_encoding(config.shell.encoding)
            .with_capture_stderr(config.shell.capture_stderr)
            .with_exit_handler(Box::new(exit_handler))
            .build())
    }

    /// Directory of locally installed executables.
    #[must_use]
    pub fn local_bin(&self) -> &Path {
        self.environment.local_bin()
    }

    /// Builds the environment a subprocess would receive, laid out for
    /// `platform`.
    ///
    /// `platform` defaults to the configured override, then the host.
    /// `source` defaults to the live process environment.
    #[must_use]
    pub fn modified_env(&self, platform: Option<Platform>, source: Option<&Env>) -> Env {
        self.environment.build(platform.or(self.platform), source)
    }

    /// Runs `command` through the host shell and returns its stdout.
    ///
    /// Blocks until the command exits. The output is returned as produced,
    /// trailing newline included.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::CommandFailed` if the command exits non-zero,
    /// carrying the exit status and captured output. Spawn and I/O failures
    /// are reported as `SpawnFailed` and `Io`.
    pub fn exec_silent(&self, command: &str) -> ProcessResult<String> {
        let capture = if self.capture_stderr {
            Capture::STDOUT | Capture::STDERR
        } else {
            Capture::STDOUT
        };
        let mut builder = ProcessBuilder::shell(command)
            .env(self.host_env())
            .capture(capture)
            .encoding(self.encoding);
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }
        builder.run_blocking().map(ProcessOutput::into_stdout)
    }

    /// Runs `command` and prints its output to stdout, followed by a newline.
    ///
    /// # Errors
    ///
    /// Same as [`exec_silent`](Self::exec_silent); nothing is printed on failure.
    pub fn exec(&self, command: &str) -> ProcessResult<()> {
        let output = self.exec_silent(command)?;
        Self::print_output(command, &output, &mut std::io::stdout().lock())
    }

    /// Like [`exec`](Self::exec), writing to `out` instead of stdout.
    ///
    /// # Errors
    ///
    /// Same as [`exec_silent`](Self::exec_silent), plus `Io` if writing fails.
    pub fn exec_to<W: Write>(&self, command: &str, out: &mut W) -> ProcessResult<()> {
        let output = self.exec_silent(command)?;
        Self::print_output(command, &output, out)
    }

    fn print_output<W: Write>(command: &str, output: &str, out: &mut W) -> ProcessResult<()> {
        writeln!(out, "{output}")
            .and_then(|()| out.flush())
            .map_err(|source| ProcessError::Io {
                command: command.to_string(),
                source,
            })
    }

    /// Resolves `program` the way a subprocess started by this instance would.
    #[must_use]
    pub fn which(&self, program: &str) -> Option<PathBuf> {
        let cwd = self
            .cwd
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        ProcessBuilder::find_in(program, &self.host_env(), &cwd)
    }

    /// The real child environment; the platform override does not apply.
    fn host_env(&self) -> Env {
        self.environment.build(None, None)
    }

    /// Exits the process with `code` through the configured [`ExitHandler`].
    pub fn exit(&self, code: i32) {
        self.exit_handler.exit(code);
    }
}
