// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result         application plumbing (config, logging, CLI)
//!
//! ConfigError            MissingKey, InvalidValue, InvalidOverride
//! ProcessError           ExecutableNotFound, SpawnFailed, CommandFailed, Io
//!   CommandFailed  -->  CommandExecutionError
//!                        command, code, signal, stdout, stderr
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type for process execution.
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not of the form `section/key=value`.
    #[error("invalid option override '{0}' (expected 'section/key=value')")]
    InvalidOverride(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and terminated unsuccessfully.
    #[error(transparent)]
    CommandFailed(#[from] CommandExecutionError),

    /// I/O failure while driving the child or collecting its output.
    #[error("i/o error while running '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Returns the execution failure if the command ran and failed.
    #[must_use]
    pub const fn as_command_failure(&self) -> Option<&CommandExecutionError> {
        match self {
            Self::CommandFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// A command that terminated with a non-zero status or was killed by a signal.
///
/// Carries whatever the command produced on its captured streams before
/// terminating. `stderr` is empty unless stderr capture was requested.
#[derive(Debug, Clone, Error)]
pub struct CommandExecutionError {
    /// The command line as given.
    pub command: String,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    /// Terminating signal (Unix only).
    pub signal: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandExecutionError {
    /// Exit status to report to the hosting process: the child's code, or 1
    /// when it has none.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl std::fmt::Display for CommandExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "command '{}' exited with code {code}", self.command),
            (None, Some(signal)) => write!(
                f,
                "command '{}' was terminated by signal {signal}",
                self.command
            ),
            (None, None) => write!(f, "command '{}' terminated abnormally", self.command),
        }
    }
}

#[cfg(test)]
mod tests;
