//! Orchestration of one solve request: stage, invoke, clean up.

use std::path::Path;

use anyhow::Result;

use crate::staging::StagedInstance;
use crate::worker::{Worker, WorkerOutput};

/// Run one full solve: stage the instance, hand its path to the worker,
/// wait for the worker to exit, and return its stdout trimmed of
/// surrounding whitespace.
///
/// The staged file is removed on every exit path. [`StagedInstance`]
/// cleans up on drop and is scoped to this call, so a spawn failure or
/// a crashed worker never leaves stale staged state behind.
///
/// A worker that ran but exited non-zero is not an error: whatever
/// stdout it produced is returned as-is, and the status is diagnosed on
/// stderr. Only a worker that could not be started at all fails the
/// solve.
pub async fn solve(instance: &[u8], worker: &dyn Worker) -> Result<String> {
    let staged = StagedInstance::stage(instance)?;
    let output = worker.run(staged.path()).await?;
    Ok(relay(worker.name(), &output))
}

/// Like [`solve`], but staging under `parent` instead of the system
/// temp dir. A staging failure aborts before any worker is spawned.
pub async fn solve_in(
    parent: impl AsRef<Path>,
    instance: &[u8],
    worker: &dyn Worker,
) -> Result<String> {
    let staged = StagedInstance::stage_in(parent, instance)?;
    let output = worker.run(staged.path()).await?;
    Ok(relay(worker.name(), &output))
}

/// Turn captured worker output into the caller-visible result.
///
/// stderr and an abnormal exit status go to our own stderr as
/// diagnostics; neither alters the stdout-based result contract.
fn relay(name: &str, output: &WorkerOutput) -> String {
    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }
    match output.status {
        Some(0) => {}
        Some(code) => eprintln!("warning: {name} exited with status {code}"),
        None => eprintln!("warning: {name} was terminated by a signal"),
    }
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}
