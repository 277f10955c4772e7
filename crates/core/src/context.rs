// Run context: the timestamped directory and results file for one invocation

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::error::{BenchError, Result};

/// Name of the samples file inside each run directory
pub const RESULTS_FILE_NAME: &str = "results.csv";

/// Format `now` as an RFC3339 timestamp with second precision.
///
/// A zero offset is rendered as `Z`.
pub fn run_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Paths owned by a single benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub timestamp: String,
    pub run_dir: PathBuf,
    pub results_path: PathBuf,
}

impl RunContext {
    /// Create `<output_dir>/<timestamp>/` (and any missing parents) and an
    /// empty `results.csv` inside it.
    ///
    /// An existing results file at the same path is truncated.
    pub fn create(output_dir: &Path, timestamp: &str) -> Result<Self> {
        let run_dir = output_dir.join(timestamp);
        tracing::info!(path = %run_dir.display(), "Creating output directory");
        fs::create_dir_all(&run_dir).map_err(|e| BenchError::filesystem(&run_dir, e))?;

        let results_path = run_dir.join(RESULTS_FILE_NAME);
        tracing::info!(path = %results_path.display(), "Creating results file");
        File::create(&results_path).map_err(|e| BenchError::filesystem(&results_path, e))?;

        Ok(Self {
            timestamp: timestamp.to_string(),
            run_dir,
            results_path,
        })
    }

    /// Create a run context stamped with the current local time
    pub fn create_now(output_dir: &Path) -> Result<Self> {
        Self::create(output_dir, &run_timestamp(&Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_run_timestamp_utc_uses_z() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(run_timestamp(&ts), "2024-03-09T14:05:07Z");
    }

    #[test]
    fn test_run_timestamp_keeps_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = offset.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(run_timestamp(&ts), "2024-03-09T14:05:07+02:00");
    }

    #[test]
    fn test_create_makes_nested_dirs_and_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("a").join("b");

        let ctx = RunContext::create(&base, "2024-03-09T14:05:07Z").unwrap();

        assert_eq!(ctx.run_dir, base.join("2024-03-09T14:05:07Z"));
        assert_eq!(ctx.results_path, ctx.run_dir.join("results.csv"));
        assert!(ctx.run_dir.is_dir());
        assert_eq!(fs::metadata(&ctx.results_path).unwrap().len(), 0);
    }

    #[test]
    fn test_create_twice_truncates_results() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = RunContext::create(tmp.path(), "2024-03-09T14:05:07Z").unwrap();
        fs::write(&ctx.results_path, "12\n34\n").unwrap();

        let again = RunContext::create(tmp.path(), "2024-03-09T14:05:07Z").unwrap();

        assert_eq!(again, ctx);
        assert_eq!(fs::read_to_string(&again.results_path).unwrap(), "");
    }

    #[test]
    fn test_create_fails_when_output_dir_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let err = RunContext::create(&blocker, "2024-03-09T14:05:07Z").unwrap_err();
        assert!(matches!(err, BenchError::Filesystem { .. }));
    }
}
