// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Describing a child process before it runs.
//!
//! ```text
//! ProcessBuilder::new(program) | ::shell(command_line)
//!   .args() .cwd() .env(Env)
//!   .capture(Capture::STDOUT | Capture::STDERR)   piped, decoded with .encoding()
//!                                                 everything else inherited
//! ```

use bitflags::bitflags;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::utility::encoding::Encoding;

bitflags! {
    /// Output streams piped back into [`ProcessOutput`].
    ///
    /// Streams not listed here go straight to the parent's terminal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capture: u8 {
        const STDOUT = 1;
        const STDERR = 1 << 1;
    }
}

impl Default for Capture {
    fn default() -> Self {
        Self::empty()
    }
}

/// What a finished child left behind.
///
/// `stdout` and `stderr` are empty unless the stream was captured.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub(super) exit_code: Option<i32>,
    pub(super) signal: Option<i32>,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

impl ProcessOutput {
    /// `None` if the child was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Terminating signal, Unix only.
    #[must_use]
    pub const fn signal(&self) -> Option<i32> {
        self.signal
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub fn into_stdout(self) -> String {
        self.stdout
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// A child process waiting to be run.
///
/// Executed by [`run`](Self::run) or [`run_blocking`](Self::run_blocking).
#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<String>,
    /// Appended verbatim after `args`; Windows only.
    pub(super) raw_args: Vec<String>,
    pub(super) cwd: Option<PathBuf>,
    /// Replaces the inherited environment when set.
    pub(super) env: Option<Env>,
    pub(super) capture: Capture,
    pub(super) encoding: Encoding,
    /// Shown in logs and errors instead of the program name.
    pub(super) label: Option<String>,
}

impl ProcessBuilder {
    /// A bare program name is looked up on the child's `PATH` at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            raw_args: Vec::new(),
            cwd: None,
            env: None,
            capture: Capture::default(),
            encoding: Encoding::default(),
            label: None,
        }
    }

    /// Runs `command` through the host shell, labelled with the command text.
    ///
    /// Unix: `/bin/sh -c <command>`. Windows: `%ComSpec% /d /s /c "<command>"`
    /// (`cmd.exe` when `ComSpec` is unset) with the quoted command passed
    /// through unescaped, so `cmd` sees it exactly as written.
    pub fn shell(command: impl Into<String>) -> Self {
        let command = command.into();

        #[cfg(windows)]
        let mut builder = {
            let comspec = std::env::var("ComSpec").unwrap_or_else(|_| "cmd.exe".to_string());
            let mut builder = Self::new(comspec).args(["/d", "/s", "/c"]);
            builder.raw_args.push(format!("\"{command}\""));
            builder
        };
        #[cfg(not(windows))]
        let mut builder = Self::new("/bin/sh").args(["-c", command.as_str()]);

        builder.label = Some(command);
        builder
    }

    /// Path `program` would resolve to for a child started with `env`.
    ///
    /// Lookup follows `env`'s search path; relative entries are taken from
    /// `cwd`.
    #[must_use]
    pub fn find_in(program: &str, env: &Env, cwd: &Path) -> Option<PathBuf> {
        which::which_in(program, env.search_path(), cwd).ok()
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The child sees exactly these variables and nothing inherited.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub const fn capture(mut self, streams: Capture) -> Self {
        self.capture = streams;
        self
    }

    /// Encoding used to decode captured streams.
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}
