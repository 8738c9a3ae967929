//! Build directory cleaning
//!
//! Removes everything inside the build directory while leaving the directory
//! itself in place, so CMake can be re-run into a fresh tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Total size in bytes of all files under a path
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

/// Format a byte count for display
pub fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

/// Remove every entry inside the build directory, keeping the directory
///
/// Files are unlinked directly, subdirectories are removed recursively.
/// A nonexistent directory is already clean. Returns the bytes freed.
pub fn clean_build_dir(build_dir: &Path) -> Result<u64> {
    if !build_dir.exists() {
        return Ok(0);
    }

    let freed = dir_size(build_dir);

    let entries = fs::read_dir(build_dir)
        .with_context(|| format!("Failed to read build directory: {}", build_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        }
    }

    Ok(freed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_nonexistent_dir_is_a_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("build");

        assert_eq!(clean_build_dir(&missing).unwrap(), 0);
        assert!(!missing.exists());
    }

    #[test]
    fn test_clean_empty_dir_is_a_noop() {
        let tmp = tempfile::tempdir().unwrap();

        assert_eq!(clean_build_dir(tmp.path()).unwrap(), 0);
        assert!(tmp.path().is_dir());
    }

    #[test]
    fn test_clean_removes_files_and_subdirs_but_keeps_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let build_dir = tmp.path();

        fs::write(build_dir.join("CMakeCache.txt"), "cache").unwrap();
        fs::create_dir_all(build_dir.join("CMakeFiles").join("3.28")).unwrap();
        fs::write(
            build_dir.join("CMakeFiles").join("3.28").join("log.txt"),
            "log",
        )
        .unwrap();

        let freed = clean_build_dir(build_dir).unwrap();

        assert!(freed > 0);
        assert!(build_dir.is_dir());
        assert_eq!(fs::read_dir(build_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("stale.o"), "obj").unwrap();

        clean_build_dir(tmp.path()).unwrap();
        assert_eq!(clean_build_dir(tmp.path()).unwrap(), 0);
        assert!(tmp.path().is_dir());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
    }
}
