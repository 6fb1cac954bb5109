//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Skillkit - scaffold, validate and package agent skills
#[derive(Parser, Debug)]
#[command(name = "skillkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, short = 'm', visible_alias = "machine", global = true)]
    pub robot: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/skillkit/config.toml, then ./.skillkit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format: `--robot` wins over `--plain`.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Human
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new skill directory from the template
    Init(commands::init::InitArgs),

    /// Check a skill folder's structure and SKILL.md metadata
    Validate(commands::validate::ValidateArgs),

    /// Validate a skill folder and package it into a .skill archive
    Package(commands::package::PackageArgs),

    /// Install (if needed) and run cargo-semver-checks, forwarding its exit code
    SemverCheck(commands::semver::SemverCheckArgs),
}
