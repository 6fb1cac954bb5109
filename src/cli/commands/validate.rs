//! skillkit validate - Check a skill folder's structure and metadata

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::core::validate::validate_skill;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the skill folder
    pub skill_path: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let report = validate_skill(&args.skill_path)?;

    if ctx.robot_mode {
        emit_json(&robot_ok(serde_json::json!({
            "path": args.skill_path.display().to_string(),
            "valid": report.valid,
            "message": report.message,
        })))?;
    } else if report.valid {
        println!("{} {}", "✓".green(), report.message);
    } else {
        println!("{} {}", "✗".red(), report.message);
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
