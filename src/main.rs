use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tsp_relay::consts::{DEFAULT_JAVA_BIN, DEFAULT_SOLVER_JAR};
use tsp_relay::harness;
use tsp_relay::worker::jvm::{JvmWorker, JvmWorkerConfig};

#[derive(Parser)]
#[command(
    name = "tsp-relay",
    version,
    about = "Relay a TSP instance to an external solver and print its answer."
)]
struct Cli {
    /// Path to a file containing the problem instance text
    input: Option<PathBuf>,

    /// JVM binary used to launch the solver
    #[arg(long, default_value = DEFAULT_JAVA_BIN)]
    java_bin: PathBuf,

    /// Solver jar that receives the staged instance path
    #[arg(long, default_value = DEFAULT_SOLVER_JAR)]
    solver_jar: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        // No input file — explain and exit without staging or spawning.
        eprintln!(
            "This tool requires an input file. Please select one from the data \
             directory (e.g. tsp-relay ./data/tsp_51_1)."
        );
        return Ok(());
    };

    let instance = std::fs::read(&input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let worker = JvmWorker::new(JvmWorkerConfig {
        java_bin: cli.java_bin,
        solver_jar: cli.solver_jar,
    });

    let result = harness::solve(&instance, &worker).await?;
    println!("{result}");
    Ok(())
}
