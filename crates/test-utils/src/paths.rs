//! Scratch file helpers for tests.

use std::path::{Path, PathBuf};

/// Creates a temporary directory, removed when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("geoloc_test_")
        .tempdir()
        .expect("Failed to create temporary test directory")
}

/// Writes `contents` to `dir/name` and returns the file path.
pub fn write_test_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}
