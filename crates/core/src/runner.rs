// Benchmark runner
//
// One request at a time: send, time, append, sleep. The first failure ends
// the run; rows already appended stay on disk.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::probe::Probe;
use crate::writer::append_samples;

pub struct BenchmarkRunner {
    probe: Arc<dyn Probe>,
    iterations: u64,
    inter_arrival: Duration,
    results_path: PathBuf,
}

impl BenchmarkRunner {
    pub fn new(
        probe: Arc<dyn Probe>,
        iterations: u64,
        inter_arrival: Duration,
        results_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            probe,
            iterations,
            inter_arrival,
            results_path: results_path.into(),
        }
    }

    /// Run every burst in order and return the number of samples written.
    pub async fn run(self) -> Result<u64> {
        tracing::info!(
            iterations = self.iterations,
            probe = self.probe.name(),
            "Running benchmark"
        );

        let mut written = 0;
        for burst in 0..self.iterations {
            tracing::info!(burst, "Burst");

            tracing::info!(at = %Local::now().to_rfc3339(), "Sending request");
            let start = Instant::now();
            self.probe.send().await?;
            let elapsed = start.elapsed();
            tracing::info!(at = %Local::now().to_rfc3339(), "Request completed");

            let latency_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            tracing::info!(burst, latency_ms, "Time taken for request");

            append_samples(&self.results_path, [latency_ms.to_string()])?;
            written += 1;

            tokio::time::sleep(self.inter_arrival).await;
        }

        Ok(written)
    }

    /// Launch the run as a single background task
    pub fn spawn(self) -> JoinHandle<Result<u64>> {
        tokio::spawn(self.run())
    }
}
