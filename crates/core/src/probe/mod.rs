// Probes issue exactly one request per call; the runner times the call.

mod http;
mod shell;

pub use http::HttpProbe;
pub use shell::{run_command, ShellProbe, DEFAULT_COMMAND_TEMPLATE};

use async_trait::async_trait;

use crate::error::Result;

/// A way of issuing one request against the benchmark target
#[async_trait]
pub trait Probe: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Issue one request and return the response text once it is fully received
    async fn send(&self) -> Result<String>;
}
