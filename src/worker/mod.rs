//! The external solver seam.
//!
//! The harness never runs optimization logic in-process. A [`Worker`]
//! is handed the staged instance's path, runs to completion out of
//! process, and yields its captured streams. [`jvm::JvmWorker`] is the
//! production implementation; tests substitute their own.

pub mod jvm;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Captured streams and exit status of a finished worker process.
#[derive(Debug, Clone)]
pub struct WorkerOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, or `None` if the process was killed by a signal.
    pub status: Option<i32>,
}

impl WorkerOutput {
    /// Output of a worker that exited cleanly with only stdout.
    pub fn from_stdout(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
            status: Some(0),
        }
    }
}

/// An external solver this harness can delegate an instance to.
#[async_trait]
pub trait Worker: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Run the worker against a staged instance file and block until it
    /// terminates. There is no timeout: a hung worker blocks forever.
    ///
    /// An `Err` means the worker could not be started at all; a worker
    /// that ran and exited non-zero is reported through
    /// [`WorkerOutput::status`], not as an error.
    async fn run(&self, staged: &Path) -> Result<WorkerOutput>;
}
