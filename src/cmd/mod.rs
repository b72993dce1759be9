// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> out (stdout in main, buffers in tests)
//!   config: options, inis
//!   shell:  env, which, exec
//! ```

pub mod config;
pub mod shell;
