// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/                 (default: cwd)
//!   node_modules/
//!     .bin/             (local_bin)
//! ```
//!
//! A relative `local_bin` is resolved against `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default location of project-local executables, relative to `root`.
pub const DEFAULT_LOCAL_BIN: &str = "node_modules/.bin";

/// Project paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Directory of locally installed executables (default: `root/node_modules/.bin`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_bin: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolves `root` and `local_bin` to absolute paths.
    ///
    /// `cwd` anchors a missing or relative `root`.
    pub fn resolve(&mut self, cwd: &Path) {
        let root = match self.root.take() {
            Some(p) if p.is_relative() => cwd.join(p),
            Some(p) => p,
            None => cwd.to_path_buf(),
        };

        self.local_bin = Some(match self.local_bin.take() {
            Some(p) if p.is_relative() => root.join(p),
            Some(p) => p,
            None => root.join(DEFAULT_LOCAL_BIN),
        });
        self.root = Some(root);
    }

    /// Get the local bin path, returning an error if not resolved.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `local_bin` is not set.
    pub fn local_bin(&self) -> Result<&Path> {
        self.local_bin.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "local_bin".to_string(),
            }
            .into()
        })
    }
}
