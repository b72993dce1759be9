// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process spawning and output capture.
//!
//! ```text
//! ProcessBuilder::shell("npm test")
//!   .env() .cwd() .capture(Capture::STDOUT)
//!   .run_blocking() / .run()
//!       --> tokio::process::Command
//!           /bin/sh -c | %ComSpec% /d /s /c
//!       --> ProcessOutput { exit_code, signal, stdout, stderr }
//!       --> ProcessError::CommandFailed on non-zero exit
//! ```

pub mod builder;
mod io;
mod runner;
