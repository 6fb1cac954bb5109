//! Application context shared by command handlers.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    /// JSON on stdout instead of human-readable lines.
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let output_format = cli.output_format();

        if !output_format.use_colors() {
            colored::control::set_override(false);
        }

        Ok(Self {
            config,
            robot_mode: output_format.is_machine_readable(),
        })
    }
}
