//! JVM-hosted solver, launched as `java -jar` with fixed resource limits.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

use super::{Worker, WorkerOutput};
use crate::consts::{
    DEFAULT_JAVA_BIN, DEFAULT_SOLVER_JAR, INITIAL_HEAP_FLAG, MAX_HEAP_FLAG, THREAD_STACK_FLAG,
};

/// Where to find the JVM and the solver jar.
///
/// The resource limits themselves are deliberately not here: they are
/// fixed constants of the invocation contract, not caller-tunable.
#[derive(Debug, Clone)]
pub struct JvmWorkerConfig {
    pub java_bin: PathBuf,
    pub solver_jar: PathBuf,
}

impl Default for JvmWorkerConfig {
    fn default() -> Self {
        Self {
            java_bin: PathBuf::from(DEFAULT_JAVA_BIN),
            solver_jar: PathBuf::from(DEFAULT_SOLVER_JAR),
        }
    }
}

/// The production worker: an independently built and versioned solver
/// jar, invoked once per staged instance.
pub struct JvmWorker {
    config: JvmWorkerConfig,
}

impl JvmWorker {
    pub fn new(config: JvmWorkerConfig) -> Self {
        Self { config }
    }

    /// Invocation contract: fixed resource flags, then the jar, then the
    /// staged file's path as the only positional argument.
    fn args(&self, staged: &Path) -> Vec<OsString> {
        vec![
            INITIAL_HEAP_FLAG.into(),
            MAX_HEAP_FLAG.into(),
            THREAD_STACK_FLAG.into(),
            "-jar".into(),
            self.config.solver_jar.clone().into(),
            staged.as_os_str().to_owned(),
        ]
    }
}

#[async_trait]
impl Worker for JvmWorker {
    fn name(&self) -> &str {
        "jvm-solver"
    }

    async fn run(&self, staged: &Path) -> Result<WorkerOutput> {
        let output = Command::new(&self.config.java_bin)
            .args(self.args(staged))
            .output()
            .await
            .with_context(|| {
                format!(
                    "failed to launch solver: {} -jar {}",
                    self.config.java_bin.display(),
                    self.config.solver_jar.display()
                )
            })?;

        Ok(WorkerOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            status: output.status.code(),
        })
    }
}
