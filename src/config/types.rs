// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for shellops.
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ShellConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::types::Platform;
use crate::logging::LogLevel;
use crate::utility::encoding::Encoding;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file is written when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Subprocess options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Encoding of captured command output.
    pub encoding: Encoding,
    /// Capture stderr instead of passing it through to the terminal.
    pub capture_stderr: bool,
    /// Working directory for commands (default: inherited).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    /// Platform whose environment conventions apply (default: host).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}
