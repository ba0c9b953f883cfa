//! Dataset persistence.
//!
//! The dataset is a CSV file with one row per extracted function. The
//! header is written once in truncate mode when the run starts; rows are
//! appended per successful file so partial progress survives a crash.
//! Signature, body and docstring fields routinely contain embedded
//! newlines and commas; the csv writer quotes them as needed.

use crate::error::{MineError, Result};
use crate::extract::DatasetRow;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Column header, fixed across runs.
const HEADER: [&str; 4] = ["signature", "body", "docstring", "id"];

/// Handle to the dataset file on disk.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
}

impl Dataset {
    /// Create (or truncate) the dataset file and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(HEADER)?;
        writer.flush().map_err(|e| MineError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Dataset {
            path: path.to_path_buf(),
        })
    }

    /// Append rows from one successfully processed file.
    pub fn append(&self, rows: &[DatasetRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| MineError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for row in rows {
            writer.write_record([
                row.signature.as_str(),
                row.body.as_str(),
                row.docstring.as_str(),
                row.id.as_str(),
            ])?;
        }
        writer.flush().map_err(|e| MineError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Path of the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
