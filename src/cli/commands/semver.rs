//! skillkit semver-check - Run cargo-semver-checks, installing it if missing
//!
//! The process exit code is the checker's own exit code.

use std::process::ExitCode;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::checker::{self, CheckerStep, FALLBACK_EXIT_CODE};
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SemverCheckArgs {
    /// Extra arguments passed to the checker (after `--`)
    #[arg(last = true)]
    pub args: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &SemverCheckArgs) -> Result<ExitCode> {
    let config = &ctx.config.checker;

    if !ctx.robot_mode {
        println!("Checking for {}...", config.binary.bold());
    }

    let outcome = checker::run_checker(config, &args.args, |step| {
        if ctx.robot_mode {
            return;
        }
        match step {
            CheckerStep::Installing => println!(
                "{} {} not found. Attempting to install...",
                "!".yellow(),
                config.binary
            ),
            CheckerStep::Running => println!("Running SemVer compatibility checks..."),
        }
    })?;

    if ctx.robot_mode {
        emit_json(&robot_ok(serde_json::json!({
            "tool": config.binary,
            "installed": outcome.installed,
            "exit_code": outcome.exit_code,
        })))?;
    }

    Ok(process_exit_code(outcome.exit_code))
}

/// Map a child exit code onto this process's exit code.
fn process_exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_byte(code))
}

fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or_else(|_| u8::try_from(FALLBACK_EXIT_CODE).unwrap_or(1))
}
