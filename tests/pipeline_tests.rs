//! End-to-end pipeline tests: real Kotlin files, real CSV output.

use ktmine::dataset::Dataset;
use ktmine::discovery::collect_files;
use ktmine::error::MineError;
use ktmine::pipeline::{process_file, run_batch};
use std::fs;
use std::path::Path;
use std::time::Duration;

const BUDGET: Duration = Duration::from_secs(15);

const GREETER: &str = "class Greeter {\n    /** Says hello. */\n    fun hello(name: String): String {\n        return name\n    }\n\n    fun bye() {\n    }\n}\n";

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("dataset should be readable");
    reader.records().map(|r| r.expect("valid record")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_file_extracts_documented_and_bare_functions() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("greeter.kt");
        fs::write(&file, GREETER).unwrap();

        let rows = process_file(&file, 0, BUDGET).expect("processing should succeed");
        assert_eq!(rows.len(), 2);

        // The documented member function, docstring attached, id from the
        // line the declaration starts on.
        assert!(rows[0].signature.contains("fun hello(name: String): String"));
        assert_eq!(rows[0].docstring, "/** Says hello. */");
        assert_eq!(rows[0].id, "f0:m3");

        // The undocumented one.
        assert!(rows[1].signature.contains("fun bye()"));
        assert_eq!(rows[1].docstring, "");
        assert_eq!(rows[1].id, "f0:m7");
    }

    #[test]
    fn test_unparsable_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a_good.kt");
        let bad = dir.path().join("z_bad.kt");
        fs::write(&good, "fun ok() {\n}\n").unwrap();
        fs::write(&bad, "class {{{{ not kotlin at all").unwrap();

        let dataset_path = dir.path().join("dataset.csv");
        let dataset = Dataset::create(&dataset_path).unwrap();

        let files = collect_files(dir.path(), "kt").unwrap();
        assert_eq!(files.len(), 2);

        let summary = run_batch(&files, &dataset, BUDGET);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.successes(), 1);
        assert_eq!(summary.failed, vec![bad.clone()]);
        assert_eq!(summary.report(), "Successfully parsed 1/2 files | 50.00%");

        // The dataset holds the good file's rows only; the failed file
        // left no trace.
        let records = read_rows(&dataset_path);
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][3], "f0:m1");
    }

    #[test]
    fn test_deadline_exhaustion_looks_like_a_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("fine.kt");
        fs::write(&file, GREETER).unwrap();

        // A zero budget cancels even a healthy file.
        let err = process_file(&file, 0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, MineError::DeadlineExceeded { .. }));

        // Through the batch it is recorded exactly like a parse failure:
        // the file is failed and the dataset is untouched past its header.
        let dataset_path = dir.path().join("dataset.csv");
        let dataset = Dataset::create(&dataset_path).unwrap();
        let summary = run_batch(&[file.clone()], &dataset, Duration::ZERO);
        assert_eq!(summary.successes(), 0);
        assert_eq!(summary.failed, vec![file]);
        assert!(read_rows(&dataset_path).is_empty());
    }

    #[test]
    fn test_file_indices_follow_enumeration_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.kt"), "fun first() {\n}\n").unwrap();
        fs::write(dir.path().join("b.kt"), "fun second() {\n}\n").unwrap();

        let dataset_path = dir.path().join("dataset.csv");
        let dataset = Dataset::create(&dataset_path).unwrap();
        let files = collect_files(dir.path(), "kt").unwrap();
        let summary = run_batch(&files, &dataset, BUDGET);
        assert_eq!(summary.successes(), 2);

        let records = read_rows(&dataset_path);
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][3], "f0:m1");
        assert_eq!(&records[1][3], "f1:m1");
    }

    #[test]
    fn test_unreadable_file_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.kt");

        let dataset_path = dir.path().join("dataset.csv");
        let dataset = Dataset::create(&dataset_path).unwrap();
        let summary = run_batch(&[missing.clone()], &dataset, BUDGET);
        assert_eq!(summary.successes(), 0);
        assert_eq!(summary.failed, vec![missing]);
    }

    #[test]
    fn test_forward_declared_containers_yield_empty_success() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("abstract.kt");
        fs::write(&file, "interface Marker\n").unwrap();

        let rows = process_file(&file, 0, BUDGET).expect("bodyless container is not an error");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_object_and_nested_members_are_reached() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested.kt");
        fs::write(
            &file,
            "object Util {\n    fun outer() {\n    }\n\n    class Inner {\n        fun inner() {\n        }\n    }\n}\n",
        )
        .unwrap();

        let rows = process_file(&file, 0, BUDGET).unwrap();
        let signatures: Vec<&str> = rows.iter().map(|r| r.signature.as_str()).collect();
        assert_eq!(rows.len(), 2);
        assert!(signatures[0].contains("fun outer()"));
        assert!(signatures[1].contains("fun inner()"));
    }
}
