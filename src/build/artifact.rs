//! Built application lookup and launch
//!
//! CMake generators differ in whether they nest executables under a
//! per-configuration subdirectory (multi-config generators like Visual
//! Studio) or write them flat (single-config generators like Makefiles).
//! Both layouts are probed, mode-specific path first.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use crate::build::cmake::BuildType;
use crate::error::BuildError;

/// Name of the application target produced by the engine build
pub const APP_NAME: &str = "GameEngine_App";

/// Platform file name of the application executable
fn app_file_name() -> String {
    if cfg!(target_os = "windows") {
        format!("{APP_NAME}.exe")
    } else {
        APP_NAME.to_string()
    }
}

/// Candidate executable paths, in preference order
pub fn candidate_paths(build_dir: &Path, build_type: BuildType) -> [PathBuf; 2] {
    let bin_dir = build_dir.join("bin");
    let file_name = app_file_name();
    [
        bin_dir.join(build_type.to_string()).join(&file_name),
        bin_dir.join(&file_name),
    ]
}

/// Find the built application, preferring the mode-specific layout
pub fn locate_app(build_dir: &Path, build_type: BuildType) -> Option<PathBuf> {
    candidate_paths(build_dir, build_type)
        .into_iter()
        .find(|path| path.exists())
}

/// Launch the application and wait for it to finish
pub fn run_app(app_path: &Path, verbose: bool) -> Result<()> {
    let mut cmd = Command::new(app_path);

    if verbose {
        eprintln!("Running: {:?}", cmd);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute {}", app_path.display()))?;

    if !status.success() {
        return Err(BuildError::AppFailure {
            exit_code: status.code(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_candidate_order_prefers_mode_subdirectory() {
        let build_dir = Path::new("build");
        let [first, second] = candidate_paths(build_dir, BuildType::Release);

        assert!(first.starts_with(build_dir.join("bin").join("Release")));
        assert_eq!(second.parent().unwrap(), build_dir.join("bin"));
    }

    #[test]
    fn test_locate_app_missing_everywhere() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(locate_app(tmp.path(), BuildType::Debug), None);
    }

    #[test]
    fn test_locate_app_falls_back_to_flat_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let flat = tmp.path().join("bin").join(app_file_name());
        fs::create_dir_all(flat.parent().unwrap()).unwrap();
        fs::write(&flat, "").unwrap();

        assert_eq!(locate_app(tmp.path(), BuildType::Debug), Some(flat));
    }

    #[test]
    fn test_locate_app_prefers_mode_path_when_both_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let bin_dir = tmp.path().join("bin");
        let nested = bin_dir.join("Release").join(app_file_name());
        let flat = bin_dir.join(app_file_name());

        fs::create_dir_all(nested.parent().unwrap()).unwrap();
        fs::write(&nested, "").unwrap();
        fs::write(&flat, "").unwrap();

        assert_eq!(locate_app(tmp.path(), BuildType::Release), Some(nested));
    }

    #[test]
    fn test_mode_path_is_keyed_to_the_requested_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("bin").join("Release").join(app_file_name());
        fs::create_dir_all(nested.parent().unwrap()).unwrap();
        fs::write(&nested, "").unwrap();

        // A Debug lookup must not pick up the Release artifact
        assert_eq!(locate_app(tmp.path(), BuildType::Debug), None);
    }
}
