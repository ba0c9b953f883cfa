//! File and batch processing.
//!
//! The file pipeline runs read + parse + extract for one file under a
//! wall-clock deadline. The batch orchestrator drives it across the whole
//! enumeration, streams rows to the dataset as each file succeeds, and
//! turns every per-file failure into a record instead of an error: one
//! bad file never aborts the batch.

use crate::dataset::Dataset;
use crate::deadline::Deadline;
use crate::error::{MineError, Result};
use crate::extract::{extract, DatasetRow};
use crate::parse::parse_kotlin;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How often the batch logs progress, in files.
const PROGRESS_INTERVAL: usize = 100;

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of files the batch attempted.
    pub total: usize,

    /// Paths of the files that failed, in processing order.
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    /// Number of files that parsed and extracted cleanly.
    pub fn successes(&self) -> usize {
        self.total - self.failed.len()
    }

    /// Success rate as a percentage. An empty batch counts as fully
    /// successful rather than dividing by zero.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.successes() as f64 / self.total as f64 * 100.0
        }
    }

    /// The human-readable summary line printed at the end of a run.
    pub fn report(&self) -> String {
        format!(
            "Successfully parsed {}/{} files | {:.2}%",
            self.successes(),
            self.total,
            self.success_rate()
        )
    }
}

/// Process a single file into dataset rows.
///
/// The whole read + parse + extract sequence runs under one deadline,
/// constructed here and gone when this function returns by any path.
/// Every failure class (unreadable file, invalid UTF-8, syntax error,
/// deadline exhaustion) comes back as an error for the caller to record;
/// a failed file contributes zero rows.
pub fn process_file(path: &Path, file_index: usize, budget: Duration) -> Result<Vec<DatasetRow>> {
    let deadline = Deadline::after(budget);

    let source = fs::read_to_string(path).map_err(|e| MineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    deadline.check(path)?;

    let declarations = parse_kotlin(path, &source, &deadline)?;

    let mut rows = Vec::new();
    for declaration in &declarations {
        deadline.check(path)?;
        rows.extend(extract(declaration, file_index));
    }
    Ok(rows)
}

/// Run the batch over an ordered file list.
///
/// File indices are assigned in enumeration order, 0-based. Rows from
/// each successful file are appended to the dataset immediately; an
/// append failure is recorded against that file like any other failure.
pub fn run_batch(files: &[PathBuf], dataset: &Dataset, budget: Duration) -> BatchSummary {
    let mut failed = Vec::new();

    for (file_index, path) in files.iter().enumerate() {
        let outcome = process_file(path, file_index, budget)
            .and_then(|rows| dataset.append(&rows).map(|_| rows.len()));

        match outcome {
            Ok(count) => debug!("{}: extracted {} rows", path.display(), count),
            Err(err) => {
                warn!("{}: {}", path.display(), err);
                failed.push(path.clone());
            }
        }

        if (file_index + 1) % PROGRESS_INTERVAL == 0 {
            info!("Processed {}/{} files", file_index + 1, files.len());
        }
    }

    BatchSummary {
        total: files.len(),
        failed,
    }
}
