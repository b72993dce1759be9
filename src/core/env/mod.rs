// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String> + Platform)
//! Sources: current_env(), Env::from_map(), Env::from_vars()
//! Ops: set/get/remove/prepend_path
//!
//! EnvironmentBuilder { local_bin }
//!   build(platform?, source?)
//!     platform --> Platform::current()
//!     source   --> current_env()
//!     copy source --> Env::from_vars(platform, ..)
//!     PATH = <local_bin><sep><PATH>
//! ```
//!
//! - **Names kept verbatim**: `Foo` and `FOO` stay distinct on every platform;
//!   on Windows the search path is found as `PATH`, `Path`, ... and rewritten
//!   under that name
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: Encoding at I/O boundaries only

pub mod container;
pub mod types;


use std::path::{Path, PathBuf};

use tracing::trace;

use container::Env;
use types::Platform;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> Env {
    Env::from_vars(
        Platform::current(),
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    )
}

/// Derives subprocess environments that resolve project-local executables
/// first.
#[derive(Debug, Clone)]
pub struct EnvironmentBuilder {
    local_bin: PathBuf,
}

impl EnvironmentBuilder {
    /// Creates a builder that prepends `local_bin` to the search path.
    pub fn new(local_bin: impl Into<PathBuf>) -> Self {
        Self {
            local_bin: local_bin.into(),
        }
    }

    /// Directory of locally installed executables.
    #[must_use]
    pub fn local_bin(&self) -> &Path {
        &self.local_bin
    }

    /// Builds a fresh environment for a subprocess.
    ///
    /// Every variable of `source` (default: the live process environment) is
    /// copied into a new [`Env`] laid out for `platform` (default: the host),
    /// then the search path is rewritten to `<local_bin><sep><old value>`.
    /// `source` itself is never modified.
    #[must_use]
    pub fn build(&self, platform: Option<Platform>, source: Option<&Env>) -> Env {
        let platform = platform.unwrap_or_default();
        let mut env = match source {
            Some(source) => Env::from_vars(platform, source.iter()),
            None => Env::from_vars(platform, current_env().iter()),
        };
        env.prepend_path(&self.local_bin);

        trace!(
            platform = %platform,
            local_bin = %self.local_bin.display(),
            vars = env.len(),
            "built subprocess environment"
        );
        env
    }
}
