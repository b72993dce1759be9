// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! Platform: "win32"/"windows" → Windows, "linux", "darwin"/"macos", * → Other
//!   path_separator()   ';' on Windows, ':' elsewhere
//!   folds_case()       search path found as PATH, Path or path on Windows only
//! EnvData: BTreeMap<String, String> + Platform, names kept verbatim
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Operating system family an environment is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Any other Unix-like system.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Parses a platform identifier, accepting both Node-style (`win32`,
    /// `darwin`) and Rust-style (`windows`, `macos`) names.
    ///
    /// Unknown identifiers map to [`Platform::Other`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "win32" | "windows" => Self::Windows,
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::MacOs,
            _ => Self::Other,
        }
    }

    /// Canonical identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Windows => "win32",
            Self::Linux => "linux",
            Self::MacOs => "darwin",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Separator between search path entries.
    #[must_use]
    pub const fn path_separator(self) -> char {
        if self.is_windows() { ';' } else { ':' }
    }

    /// Whether the loader looks up the search path variable without regard
    /// to case.
    #[must_use]
    pub const fn folds_case(self) -> bool {
        self.is_windows()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "shell".to_string(),
                key: "platform".to_string(),
                message: "platform identifier must not be empty".to_string(),
            });
        }
        Ok(Self::from_id(s.trim()))
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Variable storage shared between clones of an `Env`.
///
/// Names are stored verbatim. `Foo` and `FOO` are two variables even on
/// Windows; only the search path is looked up without regard to case.
#[derive(Debug, Clone)]
pub(super) struct EnvData {
    vars: BTreeMap<String, String>,
    platform: Platform,
}

impl EnvData {
    pub(super) const fn new(platform: Platform) -> Self {
        Self {
            vars: BTreeMap::new(),
            platform,
        }
    }

    pub(super) const fn platform(&self) -> Platform {
        self.platform
    }

    pub(super) const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.vars
    }
}
