// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for processes.
//!
//! ```text
//! collect_output(child)
//!   wait_with_output()   drains piped stdout/stderr while waiting
//!   decode()             captured streams only, builder encoding
//!   exit_parts()         code / signal
//!   --> ProcessOutput { exit_code, signal, stdout, stderr }
//! ```

use std::process::ExitStatus;
use tokio::process::Child;
use tracing::trace;

use super::builder::{Capture, ProcessBuilder, ProcessOutput};
use crate::utility::encoding::bytes_to_utf8;

/// Splits an exit status into its code and terminating signal.
fn exit_parts(status: ExitStatus) -> (Option<i32>, Option<i32>) {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        (status.code(), status.signal())
    }
    #[cfg(not(unix))]
    {
        (status.code(), None)
    }
}

impl ProcessBuilder {
    /// Waits for the child, collecting whatever streams were piped.
    pub(super) async fn collect_output(
        &self,
        name: &str,
        child: Child,
    ) -> std::io::Result<ProcessOutput> {
        let output = child.wait_with_output().await?;
        let (exit_code, signal) = exit_parts(output.status);

        trace!(
            process = %name,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "collected output"
        );

        Ok(ProcessOutput {
            exit_code,
            signal,
            stdout: self.decode(Capture::STDOUT, &output.stdout),
            stderr: self.decode(Capture::STDERR, &output.stderr),
        })
    }

    /// Empty unless `stream` was captured.
    fn decode(&self, stream: Capture, bytes: &[u8]) -> String {
        if !self.capture.contains(stream) {
            return String::new();
        }
        bytes_to_utf8(self.encoding, bytes).into_owned()
    }
}
