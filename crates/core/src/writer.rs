// Sample writer
//
// Each call opens the results file, appends, syncs and drops the handle, so
// every completed burst is on disk before the next one starts.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Append each value as a one-column CSV row to an existing file.
pub fn append_samples<I, S>(path: &Path, values: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tracing::debug!(path = %path.display(), "Writing data to file");

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| BenchError::filesystem(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for value in values {
        writer
            .write_record([value.as_ref()])
            .map_err(|source| BenchError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BenchError::filesystem(path, e.into_error()))?;
    file.sync_data()
        .map_err(|e| BenchError::filesystem(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_preserves_existing_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("results.csv");
        fs::write(&path, "").unwrap();

        append_samples(&path, ["15"]).unwrap();
        append_samples(&path, ["7", "230"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "15\n7\n230\n");
    }

    #[test]
    fn test_values_are_csv_escaped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("results.csv");
        fs::write(&path, "").unwrap();

        append_samples(&path, ["a,b", "say \"hi\""]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"a,b\"\n\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("results.csv");

        let err = append_samples(&path, ["1"]).unwrap_err();

        assert!(matches!(err, BenchError::Filesystem { .. }));
        assert!(!path.exists());
    }
}
