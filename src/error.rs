//! Error types and helpers for user-friendly error messages
//!
//! Every failure class of the pipeline is terminal: the orchestrator reports
//! it with a hint where one exists and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Failure classes of the build pipeline
#[derive(Error, Debug)]
pub enum BuildError {
    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: String },

    /// CMake configure step failed
    #[error("CMake configure failed with exit code {exit_code:?}")]
    ConfigureFailure { exit_code: Option<i32> },

    /// CMake build step failed
    #[error("CMake build failed with exit code {exit_code:?}")]
    BuildFailure { exit_code: Option<i32> },

    /// Built application not found at any candidate path
    #[error("Cannot find the built application")]
    MissingArtifact { searched: Vec<PathBuf> },

    /// The built application exited with a failure status
    #[error("Application exited with code {exit_code:?}")]
    AppFailure { exit_code: Option<i32> },
}

impl BuildError {
    /// Create a missing tool error
    pub fn missing_tool(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            hint: hint.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            BuildError::MissingTool { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            BuildError::ConfigureFailure { .. } => {
                eprintln!(
                    "\n{} Check the CMake output above for the failing check.",
                    style("HINT:").yellow().bold()
                );
            }
            BuildError::MissingArtifact { searched } => {
                eprintln!("\n{}", style("SEARCHED:").cyan().bold());
                for path in searched {
                    eprintln!("  • {}", path.display());
                }
            }
            BuildError::BuildFailure { .. } | BuildError::AppFailure { .. } => {}
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }
}
