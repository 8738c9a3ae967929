//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::build::{self, BuildOptions};

/// gebuild - GameEngine build orchestrator
///
/// Configures and builds the GameEngine project with CMake, and can
/// optionally clean previous build output or run the built application.
#[derive(Parser, Debug)]
#[command(name = "gebuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clean the build directory before building
    #[arg(long)]
    pub clean: bool,

    /// Build in Release mode (default is Debug)
    #[arg(long)]
    pub release: bool,

    /// Build example targets
    #[arg(long)]
    pub examples: bool,

    /// Build test targets
    #[arg(long)]
    pub tests: bool,

    /// Run the application after building
    #[arg(long)]
    pub run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the build pipeline described by the parsed flags
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let options = BuildOptions {
            clean: self.clean,
            release: self.release,
            build_examples: self.examples,
            build_tests: self.tests,
            run_after_build: self.run,
        };

        build::execute(&options, self.verbose)
    }
}
