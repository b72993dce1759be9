// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process termination seam.
//!
//! ```text
//! ExitHandler::exit(code)
//!   ProcessExit     flush held LogGuard, std::process::exit, never returns
//!   RecordingExit   records codes, returns (tests, dry runs)
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::logging::LogGuard;

/// Terminates the hosting process.
///
/// Production code uses [`ProcessExit`]; tests substitute [`RecordingExit`]
/// so the code path can run without ending the test process.
pub trait ExitHandler: Send + Sync + std::fmt::Debug {
    /// Exits with `code`.
    ///
    /// Real implementations never return.
    fn exit(&self, code: i32);
}

/// Exits the current process via [`std::process::exit`].
///
/// `std::process::exit` skips destructors, so a [`LogGuard`] handed over with
/// [`flushing`](Self::flushing) is dropped before exiting.
#[derive(Debug, Default)]
pub struct ProcessExit {
    log_guard: Mutex<Option<LogGuard>>,
}

impl ProcessExit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds `guard` until exit. Dropping the handler also drops the guard.
    #[must_use]
    pub fn flushing(guard: LogGuard) -> Self {
        Self {
            log_guard: Mutex::new(Some(guard)),
        }
    }

    /// Drops the held log guard, flushing the file log. Later calls do nothing.
    pub fn release(&self) {
        let guard = self
            .log_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(guard);
    }
}

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) {
        debug!(code, "exiting");
        self.release();
        std::process::exit(code);
    }
}

/// Records requested exit codes instead of exiting.
#[derive(Debug, Default)]
pub struct RecordingExit {
    codes: Mutex<Vec<i32>>,
}

impl RecordingExit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All codes passed to [`ExitHandler::exit`], oldest first.
    #[must_use]
    pub fn codes(&self) -> Vec<i32> {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent exit code, if any.
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.codes().last().copied()
    }
}

impl ExitHandler for RecordingExit {
    fn exit(&self, code: i32) {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(code);
    }
}

impl<T: ExitHandler + ?Sized> ExitHandler for std::sync::Arc<T> {
    fn exit(&self, code: i32) {
        (**self).exit(code);
    }
}
