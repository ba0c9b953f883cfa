//! Candidate file enumeration.
//!
//! Recursively walks the cloned checkout and collects files with the
//! configured extension. The result is sorted so that file indices, and
//! therefore row ids, are deterministic across runs over the same tree.

use crate::error::{MineError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect all files under `root` with the given extension, sorted.
///
/// The extension may be given with or without a leading dot.
pub fn collect_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let wanted = extension.trim_start_matches('.');

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            MineError::Other(format!("Walk failed under {}: {}", root.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == wanted);
        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_only_matching_extension_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.kt"), "fun b() {}\n").unwrap();
        fs::write(dir.path().join("a.kt"), "fun a() {}\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source\n").unwrap();
        fs::write(dir.path().join("nested").join("c.kt"), "fun c() {}\n").unwrap();

        let files = collect_files(dir.path(), "kt").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.kt", "b.kt", "c.kt"]);
    }

    #[test]
    fn test_leading_dot_in_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.kt"), "fun a() {}\n").unwrap();

        let files = collect_files(dir.path(), ".kt").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_tree_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_files(dir.path(), "kt").unwrap();
        assert!(files.is_empty());
    }
}
