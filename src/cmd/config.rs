// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for shellops.

use std::io::Write;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use crate::error::Result;

/// Assembles the configuration sources selected by the global options.
///
/// # Errors
///
/// Returns an error if a `--set` option is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(CONFIG_FILE_NAME);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_override(&option)?;
    }
    Ok(loader)
}

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_inis_command(config_files: &[String], out: &mut impl Write) -> Result<()> {
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in config_files {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
