//! Path utilities for the build pipeline

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the project root (the directory gebuild is invoked from)
pub fn project_root() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current working directory")
}

/// Get the CMake build directory for a project root
pub fn build_dir(project_root: &Path) -> PathBuf {
    project_root.join("build")
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
