//! External checker wrapper (cargo-semver-checks by default).
//!
//! Ensures the checker binary is on `PATH`, installing it once if it is not,
//! then runs it and hands back its exit code untouched. Output is inherited
//! and never parsed.

use std::process::{Command, ExitStatus};

use tracing::{debug, info, warn};
use which::which;

use crate::config::CheckerConfig;
use crate::error::{KitError, Result};

/// Exit code used when the checker produced none (e.g. killed by a signal).
pub const FALLBACK_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerOutcome {
    /// Whether the install command had to run.
    pub installed: bool,
    /// The checker's own exit code.
    pub exit_code: i32,
}

/// Progress points reported by [`run_checker`] before each child process starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerStep {
    /// The binary is missing and the install command is about to run.
    Installing,
    /// The checker command is about to run.
    Running,
}

/// Install if needed, then run the checker.
pub fn run_checker(
    config: &CheckerConfig,
    extra_args: &[String],
    mut on_step: impl FnMut(CheckerStep),
) -> Result<CheckerOutcome> {
    let installed = if is_installed(&config.binary) {
        false
    } else {
        on_step(CheckerStep::Installing);
        install(config)?;
        true
    };
    on_step(CheckerStep::Running);
    let exit_code = run(config, extra_args)?;
    Ok(CheckerOutcome {
        installed,
        exit_code,
    })
}

/// Whether `binary` resolves on `PATH`.
#[must_use]
pub fn is_installed(binary: &str) -> bool {
    match which(binary) {
        Ok(path) => {
            debug!(binary, path = %path.display(), "checker found");
            true
        }
        Err(err) => {
            debug!(binary, error = %err, "checker not found");
            false
        }
    }
}

/// Run the configured install command once. Any failure is fatal.
pub fn install(config: &CheckerConfig) -> Result<()> {
    let install_failed = |reason: String| KitError::ToolInstallFailed {
        tool: config.binary.clone(),
        reason,
    };

    let (program, args) = config
        .install
        .split_first()
        .ok_or_else(|| install_failed("install command is empty".to_string()))?;

    info!(command = %config.install.join(" "), "installing checker");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|err| install_failed(format!("{program}: {err}")))?;

    if !status.success() {
        return Err(install_failed(format!(
            "`{}` exited with {status}",
            config.install.join(" ")
        )));
    }

    if !is_installed(&config.binary) {
        warn!(binary = %config.binary, "install finished but binary is still not on PATH");
    }
    Ok(())
}

/// Run the checker command with `extra_args` appended and return its exit code.
pub fn run(config: &CheckerConfig, extra_args: &[String]) -> Result<i32> {
    let (program, args) = config
        .command
        .split_first()
        .ok_or_else(|| KitError::ToolFailed("checker command is empty".to_string()))?;

    info!(command = %config.command.join(" "), "running checker");
    let status = Command::new(program)
        .args(args)
        .args(extra_args)
        .status()
        .map_err(|err| KitError::ToolFailed(format!("{program}: {err}")))?;

    Ok(exit_code_of(status))
}

fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or_else(|| {
        warn!(%status, "checker terminated without an exit code");
        FALLBACK_EXIT_CODE
    })
}
