// Benchmark configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{BenchError, Result};
use crate::probe::{HttpProbe, Probe, ShellProbe, DEFAULT_COMMAND_TEMPLATE};

pub const DEFAULT_OUTPUT_DIR: &str = "./latency_samples/";
pub const DEFAULT_BURSTS: u64 = 1;
pub const DEFAULT_INTER_ARRIVAL_MS: u64 = 10_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// How each request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeKind {
    /// External command through `sh -c`
    #[default]
    Shell,
    /// In-process HTTP client
    Http,
}

impl FromStr for ProbeKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shell" => Ok(ProbeKind::Shell),
            "http" => Ok(ProbeKind::Http),
            other => Err(BenchError::validation(format!("unknown probe '{other}'"))),
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Shell => write!(f, "shell"),
            ProbeKind::Http => write!(f, "http"),
        }
    }
}

/// Settings for one benchmark run. Immutable once the run starts.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Base directory; each run gets a timestamped subdirectory
    pub output_dir: PathBuf,
    /// Number of request/measure/sleep cycles
    pub bursts: u64,
    /// Sleep after every cycle, including the last
    pub inter_arrival: Duration,
    pub endpoint: String,
    pub probe: ProbeKind,
    /// Shell command template, `{endpoint}` is substituted
    pub command_template: String,
    /// Per-request deadline, only honored by the HTTP probe
    pub request_timeout: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            bursts: DEFAULT_BURSTS,
            inter_arrival: Duration::from_millis(DEFAULT_INTER_ARRIVAL_MS),
            endpoint: String::new(),
            probe: ProbeKind::default(),
            command_template: DEFAULT_COMMAND_TEMPLATE.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl BenchConfig {
    /// Burst count and inter-arrival time are passed through unchecked;
    /// only an empty endpoint is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(BenchError::validation("endpoint must not be empty"));
        }
        Ok(())
    }

    pub fn build_probe(&self) -> Result<Arc<dyn Probe>> {
        let probe: Arc<dyn Probe> = match self.probe {
            ProbeKind::Shell => Arc::new(ShellProbe::from_template(
                &self.command_template,
                &self.endpoint,
            )),
            ProbeKind::Http => Arc::new(HttpProbe::new(
                self.endpoint.clone(),
                self.request_timeout,
            )?),
        };
        Ok(probe)
    }
}
