// Output formatting for CLI

use anyhow::{Context, Result};
use burstbench_core::RunSummary;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn print_summary(&self, summary: &RunSummary) -> Result<()> {
        match self {
            OutputFormat::Json => println!("{}", render_json(summary)?),
            OutputFormat::Text => {
                print_field("Timestamp", &summary.timestamp);
                print_field("Run dir", &summary.run_dir.display().to_string());
                print_field("Results", &summary.results_file.display().to_string());
                print_field("Samples", &summary.samples_written.to_string());
            }
        }
        Ok(())
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to encode summary as JSON")
}

/// Print a simple key-value pair for text output
pub fn print_field(label: &str, value: &str) {
    println!("{}", format_field(label, value));
}

fn format_field(label: &str, value: &str) -> String {
    format!("{:<14} {}", format!("{}:", label), value)
}
