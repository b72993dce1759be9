// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()   SHELLOPS_<SECTION>__<KEY>, known sections only
//!   .set() / .set_override()
//!        |
//!        v
//!    build() --> Config (paths resolved)
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<Vec<(String, String)>>,
    overrides: Vec<(String, String)>,
    files: Vec<(String, PathBuf)>,
    cwd: Option<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            overrides: Vec::new(),
            files: Vec::new(),
            cwd: None,
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// `SHELLOPS_SHELL__CAPTURE_STDERR=true` sets `shell.capture_stderr`.
    /// Only variables naming a known section are read, so an unrelated
    /// `SHELLOPS_HOME` cannot fail the load; a misspelled key inside a known
    /// section still does.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads prefixed variables from `vars` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Directory that anchors relative paths (default: current directory).
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Sets a configuration override by dotted key (`section.key`).
    ///
    /// Overrides are applied after files and environment variables.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.overrides.push((key.to_string(), value.into()));
        self
    }

    /// Sets an override given as `section/key=value`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if `option` is malformed.
    pub fn set_override(self, option: &str) -> Result<Self> {
        let (key, value) = parse_override(option)?;
        Ok(self.set(&key, value))
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables or overrides cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    /// - The current directory cannot be determined.
    pub fn build(self) -> Result<Config> {
        let mut builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self.env_vars.unwrap_or_else(|| {
                    std::env::vars_os()
                        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                        .collect()
                });
                self.builder.add_source(
                    config::Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(section_vars(prefix, vars))),
                )
            }
            None => self.builder,
        };
        for (key, value) in self.overrides {
            builder = builder
                .set_override(key.as_str(), value)
                .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        }

        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;

        let cwd = match self.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir()?,
        };
        config.resolve(&cwd);
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the variables addressed to a `Config` section:
/// `<PREFIX>_<SECTION>__<KEY>`, compared without regard to case.
fn section_vars(
    prefix: &str,
    vars: Vec<(String, String)>,
) -> config::Map<String, String> {
    let heads: Vec<String> = Config::SECTIONS
        .iter()
        .map(|section| format!("{prefix}_{section}__").to_ascii_lowercase())
        .collect();
    vars.into_iter()
        .filter(|(name, _)| {
            let name = name.to_ascii_lowercase();
            heads.iter().any(|head| name.starts_with(head.as_str()))
        })
        .collect()
}

/// Splits `section/key=value` into (`section.key`, `value`).
///
/// # Errors
///
/// Returns `ConfigError::InvalidOverride` if the separator `/` or `=` is
/// missing or either side of `/` is empty.
pub fn parse_override(option: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(option.to_string());

    let (path, value) = option.split_once('=').ok_or_else(invalid)?;
    let (section, key) = path.split_once('/').ok_or_else(invalid)?;
    let (section, key) = (section.trim(), key.trim());
    if section.is_empty() || key.is_empty() {
        return Err(invalid());
    }

    Ok((format!("{section}.{key}"), value.to_string()))
}
