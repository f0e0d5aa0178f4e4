//! Staging of problem instances for the external worker.
//!
//! The worker reads its input from a file, so each solve request writes
//! the caller's text to disk first. Every invocation gets its own
//! staging directory, so two runs can never hand each other's input to
//! a worker.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::consts::STAGED_FILE_NAME;

/// An on-disk copy of one problem instance, handed to the worker by path.
///
/// The handle owns the file and its directory for the duration of one
/// solve request. Dropping it removes both, so the staged file cannot
/// outlive the invocation on any exit path. Removal failures are
/// reported on stderr rather than panicking, so they never mask the
/// solve result.
pub struct StagedInstance {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl StagedInstance {
    /// Stage `instance` in a fresh directory under the system temp dir.
    pub fn stage(instance: &[u8]) -> Result<Self> {
        Self::stage_in(std::env::temp_dir(), instance)
    }

    /// Stage `instance` in a fresh directory under `parent`.
    ///
    /// The bytes are written as-is, with no size or encoding validation,
    /// and flushed to disk before this returns: a process spawned
    /// afterwards sees the full contents. Any I/O failure aborts the
    /// solve before a worker is spawned.
    pub fn stage_in(parent: impl AsRef<Path>, instance: &[u8]) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("tsp-relay-")
            .tempdir_in(parent)
            .context("failed to create staging directory")?;
        let path = dir.path().join(STAGED_FILE_NAME);

        let mut file = File::create(&path)
            .with_context(|| format!("failed to create staged file at {}", path.display()))?;
        file.write_all(instance)
            .context("failed to write problem instance")?;
        file.sync_all()
            .context("failed to flush staged file to disk")?;

        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    /// Path the worker receives as its only positional argument.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedInstance {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take()
            && let Err(e) = dir.close()
        {
            eprintln!("warning: failed to remove staged instance: {e}");
        }
    }
}
