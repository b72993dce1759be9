// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for shellops.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. shellops.toml (cwd, optional)
//! 3. --ini files
//! 4. SHELLOPS_* env vars
//! 5. CLI overrides (--set, --log-level, --local-bin, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SHELLOPS_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! SHELLOPS_PATHS__LOCAL_BIN=tools/bin  → paths.local_bin = "tools/bin"
//! SHELLOPS_SHELL__ENCODING=oem         → shell.encoding = "oem"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, ShellConfig};

/// Name of the configuration file picked up from the current directory.
pub const CONFIG_FILE_NAME: &str = "shellops.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SHELLOPS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project paths.
    pub paths: PathsConfig,
    /// Subprocess options.
    pub shell: ShellConfig,
}

impl Config {
    /// Top-level sections, as named in files and environment variables.
    pub const SECTIONS: [&'static str; 3] = ["global", "paths", "shell"];

    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shellops::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("shellops.toml")
    ///     .with_env_prefix("SHELLOPS")
    ///     .set("shell.encoding", "utf8")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve relative paths against `cwd` and fill in defaults.
    pub fn resolve(&mut self, cwd: &Path) {
        self.paths.resolve(cwd);
        if let Some(dir) = self.shell.cwd.take() {
            self.shell.cwd = Some(if dir.is_relative() { cwd.join(dir) } else { dir });
        }
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_shell_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.root".into(), fmt_path(self.paths.root.as_ref()));
        options.insert(
            "paths.local_bin".into(),
            fmt_path(self.paths.local_bin.as_ref()),
        );
    }

    fn format_shell_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("shell.encoding".into(), self.shell.encoding.to_string());
        options.insert(
            "shell.capture_stderr".into(),
            self.shell.capture_stderr.to_string(),
        );
        options.insert("shell.cwd".into(), fmt_path(self.shell.cwd.as_ref()));
        options.insert(
            "shell.platform".into(),
            self.shell
                .platform
                .map_or_else(String::new, |p| p.id().to_string()),
        );
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
