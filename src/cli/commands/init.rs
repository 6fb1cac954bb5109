//! skillkit init - Create a new skill directory from the template

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::core::scaffold::{ScaffoldReport, init_skill};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Skill name, hyphen-case (e.g. my-new-skill)
    pub name: String,

    /// Directory the skill folder is created in (default: init.default_path)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<ExitCode> {
    let base = args
        .path
        .clone()
        .unwrap_or_else(|| ctx.config.init.default_path.clone());

    if !ctx.robot_mode {
        println!("{} {}", "Initializing skill:".bold(), args.name);
    }

    let report = init_skill(&args.name, &base)?;

    if ctx.robot_mode {
        emit_json(&robot_ok(robot_payload(&report)))?;
    } else {
        print_human(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn robot_payload(report: &ScaffoldReport) -> serde_json::Value {
    serde_json::json!({
        "skill_name": report.skill_name,
        "skill_dir": report.skill_dir.display().to_string(),
        "files": report
            .files
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>(),
    })
}

fn print_human(report: &ScaffoldReport) {
    println!(
        "{} Created skill directory: {}",
        "✓".green(),
        report.skill_dir.display()
    );
    for file in &report.files {
        println!("{} Created {}", "✓".green(), file.display());
    }
    println!();
    println!(
        "{} Skill '{}' initialized successfully at {}",
        "✓".green().bold(),
        report.skill_name,
        report.skill_dir.display()
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit SKILL.md and complete the TODO items");
    println!("  2. Replace or delete the example files in scripts/, references/ and assets/");
    println!(
        "  3. Run `skillkit validate {}` to check the skill",
        report.skill_dir.display()
    );
}
