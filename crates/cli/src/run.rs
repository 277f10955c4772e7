// Wires configuration, run context and runner together

use anyhow::{Context, Result};
use burstbench_core::{BenchConfig, BenchmarkRunner, RunContext, RunSummary};

pub async fn run(config: &BenchConfig) -> Result<RunSummary> {
    config.validate()?;

    let context = RunContext::create_now(&config.output_dir)
        .context("Failed to initialize run directory")?;

    let probe = config.build_probe()?;
    tracing::info!(endpoint = %config.endpoint, probe = %config.probe, "Running benchmarks...");

    let runner = BenchmarkRunner::new(
        probe,
        config.bursts,
        config.inter_arrival,
        &context.results_path,
    );
    let written = runner
        .spawn()
        .await
        .context("Benchmark task aborted")?
        .context("Benchmark run failed")?;

    tracing::info!(
        samples = written,
        path = %context.results_path.display(),
        "Benchmarks completed"
    );

    Ok(RunSummary::new(&context, written))
}
