//! CMake configuration and execution
//!
//! This module handles invoking CMake for the configure and build steps.
//! Both run with the working directory set to the build directory, so the
//! source directory is referenced as `..` and the build target as `.`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::{hints, BuildError};

/// CMake build type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// Get the CMake generator for the host platform
///
/// Windows gets an explicit Visual Studio generator; everywhere else CMake
/// picks its own default.
pub fn default_generator() -> Option<&'static str> {
    if cfg!(target_os = "windows") {
        Some("Visual Studio 17 2022")
    } else {
        None
    }
}

/// CMake invocation builder
#[derive(Debug, Default)]
pub struct CMakeConfig {
    /// Build directory (working directory for both CMake steps)
    build_dir: PathBuf,
    /// Build type
    build_type: BuildType,
    /// Generator (e.g. "Visual Studio 17 2022")
    generator: Option<String>,
    /// Enable example targets
    build_examples: bool,
    /// Enable test targets
    build_tests: bool,
    /// Verbose output
    verbose: bool,
}

impl CMakeConfig {
    /// Create a new CMake configuration for a build directory
    pub fn new(build_dir: PathBuf) -> Self {
        Self {
            build_dir,
            ..Default::default()
        }
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Set the generator
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Enable or disable example targets
    pub fn build_examples(mut self, enabled: bool) -> Self {
        self.build_examples = enabled;
        self
    }

    /// Enable or disable test targets
    pub fn build_tests(mut self, enabled: bool) -> Self {
        self.build_tests = enabled;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Find the CMake executable
    fn find_cmake() -> Result<PathBuf> {
        which::which("cmake")
            .map_err(|_| BuildError::missing_tool("cmake", hints::cmake()).into())
    }

    /// Arguments for the configure step
    ///
    /// Both feature toggles are always emitted, explicitly ON or OFF.
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        args.push(format!("-DCMAKE_BUILD_TYPE={}", self.build_type));
        args.push(format!(
            "-DBUILD_EXAMPLES={}",
            if self.build_examples { "ON" } else { "OFF" }
        ));
        args.push(format!(
            "-DBUILD_TESTS={}",
            if self.build_tests { "ON" } else { "OFF" }
        ));

        // Source directory, one level up from the build directory
        args.push("..".to_string());

        args
    }

    /// Arguments for the build step
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "--build".to_string(),
            ".".to_string(),
            "--config".to_string(),
            self.build_type.to_string(),
        ]
    }

    /// Run the CMake configure step
    pub fn configure(&self) -> Result<()> {
        let cmake = Self::find_cmake()?;

        let mut cmd = Command::new(&cmake);
        cmd.args(self.configure_args());
        cmd.current_dir(&self.build_dir);

        if self.verbose {
            eprintln!("Running: {:?}", cmd);
        }

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .context("Failed to run CMake configure")?;

        if !status.success() {
            return Err(BuildError::ConfigureFailure {
                exit_code: status.code(),
            }
            .into());
        }

        Ok(())
    }

    /// Run the CMake build step
    pub fn build(&self) -> Result<()> {
        let cmake = Self::find_cmake()?;

        let mut cmd = Command::new(&cmake);
        cmd.args(self.build_args());
        cmd.current_dir(&self.build_dir);

        if self.verbose {
            eprintln!("Running: {:?}", cmd);
        }

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .context("Failed to run CMake build")?;

        if !status.success() {
            return Err(BuildError::BuildFailure {
                exit_code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}
