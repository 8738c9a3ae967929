//! Build pipeline orchestration
//!
//! The pipeline is strictly sequential: ensure the build directory, clean it
//! if requested, configure with CMake, build, and optionally launch the
//! application. Any external failure aborts the remaining steps.

pub mod artifact;
pub mod clean;
pub mod cmake;

use anyhow::Result;

use crate::error::BuildError;
use crate::utils::paths;
use crate::utils::terminal::{print_info, print_success};

use cmake::{BuildType, CMakeConfig};

/// Build configuration, constructed once from CLI input and never mutated
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub clean: bool,
    pub release: bool,
    pub build_examples: bool,
    pub build_tests: bool,
    pub run_after_build: bool,
}

impl BuildOptions {
    /// CMake build type derived from the release flag
    pub fn build_type(&self) -> BuildType {
        if self.release {
            BuildType::Release
        } else {
            BuildType::Debug
        }
    }
}

/// Run the full build pipeline
pub fn execute(options: &BuildOptions, verbose: bool) -> Result<()> {
    let project_root = paths::project_root()?;
    let build_dir = paths::build_dir(&project_root);
    paths::ensure_dir(&build_dir)?;

    if options.clean {
        print_info("Cleaning build directory...");
        let freed = clean::clean_build_dir(&build_dir)?;
        if freed > 0 {
            print_info(&format!("Freed {}", clean::format_size(freed)));
        }
    }

    let build_type = options.build_type();
    let mut config = CMakeConfig::new(build_dir.clone())
        .build_type(build_type)
        .build_examples(options.build_examples)
        .build_tests(options.build_tests)
        .verbose(verbose);

    if let Some(generator) = cmake::default_generator() {
        config = config.generator(generator);
    }

    print_info(&format!(
        "Configuring project with CMake in {build_type} mode..."
    ));
    config.configure()?;

    print_info("Building project...");
    config.build()?;

    print_success(&format!("Build completed in {build_type} mode"));

    if options.run_after_build {
        print_info("Running application...");
        let app = artifact::locate_app(&build_dir, build_type).ok_or_else(|| {
            BuildError::MissingArtifact {
                searched: artifact::candidate_paths(&build_dir, build_type).to_vec(),
            }
        })?;
        artifact::run_app(&app, verbose)?;
    }

    Ok(())
}
