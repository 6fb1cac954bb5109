//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::process::ExitCode;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod init;
pub mod package;
pub mod semver;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Init(args) => init::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Package(args) => package::run(ctx, args),
        Commands::SemverCheck(args) => semver::run(ctx, args),
    }
}
