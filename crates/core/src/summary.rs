// Outcome of a completed run

use std::path::PathBuf;

use serde::Serialize;

use crate::context::RunContext;

/// Where a finished run left its samples. Carries no statistics over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub run_dir: PathBuf,
    pub results_file: PathBuf,
    pub samples_written: u64,
}

impl RunSummary {
    pub fn new(context: &RunContext, samples_written: u64) -> Self {
        Self {
            timestamp: context.timestamp.clone(),
            run_dir: context.run_dir.clone(),
            results_file: context.results_path.clone(),
            samples_written,
        }
    }
}
