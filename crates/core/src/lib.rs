// Burstbench core
//
// Serial HTTP latency benchmarking: issue one request at a time against an
// endpoint, time it, and append the latency in milliseconds to a CSV file
// under a timestamped run directory.
//
// Key design decisions:
// - Requests go through the Probe trait (shell command or native HTTP client)
// - Every operation returns BenchError; the binary decides whether to exit
// - The results file is reopened for every sample, so completed bursts are
//   durable even if a later burst fails

pub mod config;
pub mod context;
pub mod error;
pub mod probe;
pub mod runner;
pub mod summary;
pub mod telemetry;
pub mod writer;

// Re-exports for convenience
pub use config::{BenchConfig, ProbeKind};
pub use context::{run_timestamp, RunContext, RESULTS_FILE_NAME};
pub use error::{BenchError, ErrorKind, HttpError, Result};
pub use probe::{HttpProbe, Probe, ShellProbe};
pub use runner::BenchmarkRunner;
pub use summary::RunSummary;
pub use writer::append_samples;
