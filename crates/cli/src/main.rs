// Burstbench CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Short flags -o, -b, -i for output dir, burst count and inter-arrival time.
// Design Decision: Errors bubble up to main; a failed run exits non-zero.

mod output;
mod run;

use std::path::PathBuf;
use std::time::Duration;

use burstbench_core::config::{
    DEFAULT_BURSTS, DEFAULT_INTER_ARRIVAL_MS, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT_MS,
};
use burstbench_core::probe::DEFAULT_COMMAND_TEMPLATE;
use burstbench_core::telemetry::{init_telemetry, TelemetryConfig};
use burstbench_core::BenchConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "burstbench")]
#[command(about = "Measure request latency against an endpoint in timed bursts")]
#[command(version)]
pub struct Cli {
    /// Output directory for latency samples
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of bursts to send
    #[arg(short = 'b', long, default_value_t = DEFAULT_BURSTS)]
    pub bursts: u64,

    /// Inter-arrival time between bursts in milliseconds
    #[arg(short = 'i', long, default_value_t = DEFAULT_INTER_ARRIVAL_MS)]
    pub iat: u64,

    /// Endpoint to benchmark
    #[arg(short = 'e', long, env = "BURSTBENCH_ENDPOINT")]
    pub endpoint: String,

    /// How requests are issued
    #[arg(long, default_value = "shell", value_parser = ["shell", "http"])]
    pub probe: String,

    /// Shell command for the shell probe; `{endpoint}` is replaced with the endpoint
    #[arg(long, default_value = DEFAULT_COMMAND_TEMPLATE)]
    pub command: String,

    /// Per-request timeout in milliseconds (http probe only)
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    pub timeout: u64,

    /// Summary output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Debug logging as default instead of info; use RUST_LOG for more options
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Include the module target in each log line
    #[arg(long, default_value_t = false)]
    pub log_target: bool,
}

impl Cli {
    pub fn telemetry_config(&self) -> TelemetryConfig {
        TelemetryConfig::from_env()
            .with_verbose(self.verbose)
            .with_target(self.log_target)
    }

    pub fn to_config(&self) -> anyhow::Result<BenchConfig> {
        Ok(BenchConfig {
            output_dir: self.output_dir.clone(),
            bursts: self.bursts,
            inter_arrival: Duration::from_millis(self.iat),
            endpoint: self.endpoint.clone(),
            probe: self.probe.parse()?,
            command_template: self.command.clone(),
            request_timeout: Duration::from_millis(self.timeout),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(cli.telemetry_config());

    tracing::info!("Starting application...");

    let config = cli.to_config()?;
    let output_format = output::OutputFormat::from_name(&cli.format);

    match run::run(&config).await {
        Ok(summary) => {
            output_format.print_summary(&summary)?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Benchmark failed: {e:#}");
            Err(e)
        }
    }
}
