// Error types for benchmark runs

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while preparing or executing a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// Directory or file could not be created, opened, written or synced
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be encoded or written
    #[error("Failed to write sample to {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The shell could not be started
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The shell command ran but exited unsuccessfully
    #[error("Command `{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Native HTTP request failed
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Configuration rejected before the run started
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Failures of the native HTTP probe, split by where the request broke down
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Connection to {url} failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("{url} responded with HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Coarse error classes used by the top-level handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Filesystem,
    Subprocess,
    Http,
    Validation,
}

impl BenchError {
    /// Create a filesystem error for `path`
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BenchError::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BenchError::Filesystem { .. } | BenchError::Csv { .. } => ErrorKind::Filesystem,
            BenchError::Spawn { .. } | BenchError::CommandFailed { .. } => ErrorKind::Subprocess,
            BenchError::Http(_) => ErrorKind::Http,
            BenchError::Validation(_) => ErrorKind::Validation,
        }
    }
}
