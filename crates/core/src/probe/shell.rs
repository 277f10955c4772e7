// Shell probe: runs a command through `sh -c` and waits for it to exit

use async_trait::async_trait;
use tokio::process::Command;

use super::Probe;
use crate::error::{BenchError, Result};

/// Command used when no template is configured. `{endpoint}` is substituted.
pub const DEFAULT_COMMAND_TEMPLATE: &str =
    r#"curl -X GET -H "Content-Type: application/json" {endpoint}"#;

const ENDPOINT_PLACEHOLDER: &str = "{endpoint}";

/// The endpoint reaches the script as `$1`, never as script text
const ENDPOINT_ARG: &str = r#""$1""#;

#[derive(Debug, Clone)]
pub struct ShellProbe {
    command: String,
    args: Vec<String>,
}

impl ShellProbe {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Build the command from `template`. Every `{endpoint}` becomes `"$1"` and
    /// the endpoint is passed as the first positional parameter, so shell
    /// metacharacters in it (`&`, `;`, spaces) stay literal.
    pub fn from_template(template: &str, endpoint: &str) -> Self {
        Self {
            command: template.replace(ENDPOINT_PLACEHOLDER, ENDPOINT_ARG),
            args: vec![endpoint.to_string()],
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl Probe for ShellProbe {
    fn name(&self) -> &'static str {
        "shell"
    }

    async fn send(&self) -> Result<String> {
        run_command(&self.command, &self.args).await
    }
}

/// Run `command` with `sh -c`, capturing stdout and stderr separately.
/// `args` become the positional parameters `$1`, `$2`, ...
///
/// Returns stdout on a zero exit status. There is no deadline: a command that
/// never exits blocks the caller forever.
pub async fn run_command(command: &str, args: &[String]) -> Result<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .arg("sh")
        .args(args)
        .output()
        .await
        .map_err(|source| BenchError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(BenchError::CommandFailed {
            command: command.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    tracing::debug!(output = %stdout, "Command result");
    Ok(stdout)
}
