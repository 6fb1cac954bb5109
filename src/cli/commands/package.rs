//! skillkit package - Validate a skill folder and write a .skill archive

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::bundler::package::{PackageReport, package_skill};
use crate::cli::output::{emit_json, robot_ok};
use crate::core::validate::VALID_MESSAGE;
use crate::error::{KitError, Result};

#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Path to the skill folder
    pub skill_path: PathBuf,

    /// Directory for the archive (default: package.output_dir, else the current directory)
    pub output_dir: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &PackageArgs) -> Result<ExitCode> {
    let output_dir = args
        .output_dir
        .as_deref()
        .or(ctx.config.package.output_dir.as_deref());

    if !ctx.robot_mode {
        println!(
            "{} {}",
            "Packaging skill:".bold(),
            args.skill_path.display()
        );
    }

    let report = match package_skill(&args.skill_path, output_dir) {
        Ok(report) => report,
        Err(KitError::ValidationFailed(message)) if !ctx.robot_mode => {
            println!("{} Validation failed: {message}", "✗".red());
            println!("  Please fix the validation errors before packaging.");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err),
    };

    if ctx.robot_mode {
        emit_json(&robot_ok(serde_json::json!({
            "skill_name": report.skill_name,
            "archive": report.archive.display().to_string(),
            "entries": report.entries,
        })))?;
    } else {
        print_human(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_human(report: &PackageReport) {
    println!("{} {VALID_MESSAGE}", "✓".green());
    println!();
    for entry in &report.entries {
        println!("  Added: {entry}");
    }
    println!();
    println!(
        "{} Successfully packaged skill to: {}",
        "✓".green().bold(),
        report.archive.display()
    );
}
