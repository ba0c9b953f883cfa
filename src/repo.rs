//! Repository acquisition.
//!
//! Clones the corpus repository with the `git` binary. A clone failure is
//! fatal to the whole run: there is no partial-file fallback.

use crate::error::{MineError, Result};
use log::info;
use std::path::Path;
use std::process::Command;

/// Clone `url` into `destination`.
pub fn clone_repository(url: &str, destination: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(destination)
        .output()
        .map_err(|e| MineError::CloneFailed {
            url: url.to_string(),
            message: format!("failed to run git: {}", e),
        })?;

    if !output.status.success() {
        return Err(MineError::CloneFailed {
            url: url.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    info!("Cloned {} into {}", url, destination.display());
    Ok(())
}
