//! gebuild - build orchestrator for the GameEngine project
//!
//! A thin CLI that drives CMake to configure and build the engine, optionally
//! wiping previous build output first and optionally launching the produced
//! application afterwards.
//!
//! ## Flow
//!
//! ```text
//! gebuild → build/ modules → CMake (configure + build) → GameEngine_App
//! ```

mod build;
mod cli;
mod error;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::BuildError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<BuildError>() {
                Some(build_err) => build_err.display_with_hints(),
                None => utils::terminal::print_error(&format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}
