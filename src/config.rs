use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KitError, Result};

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".skillkit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub init: InitConfig,
    #[serde(default)]
    pub package: PackageConfig,
    #[serde(default)]
    pub checker: CheckerConfig,
}

impl Config {
    /// Load configuration: defaults, then files, then environment overrides.
    ///
    /// An explicit path (argument or `SKILLKIT_CONFIG`) replaces the global
    /// and project files entirely.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("SKILLKIT_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(env_string);

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("skillkit/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| KitError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| KitError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.init {
            self.init.merge(patch);
        }
        if let Some(patch) = patch.package {
            self.package.merge(patch);
        }
        if let Some(patch) = patch.checker {
            self.checker.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("SKILLKIT_INIT_PATH") {
            self.init.default_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("SKILLKIT_OUTPUT_DIR") {
            self.package.output_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("SKILLKIT_CHECKER_BINARY") {
            self.checker.binary = value;
        }
        if let Some(argv) = lookup("SKILLKIT_CHECKER_INSTALL").and_then(|v| split_command(&v)) {
            self.checker.install = argv;
        }
        if let Some(argv) = lookup("SKILLKIT_CHECKER_COMMAND").and_then(|v| split_command(&v)) {
            self.checker.command = argv;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    /// Destination used when `init` is called without `--path`.
    #[serde(default = "default_init_path")]
    pub default_path: PathBuf,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            default_path: default_init_path(),
        }
    }
}

impl InitConfig {
    fn merge(&mut self, patch: InitPatch) {
        if let Some(value) = patch.default_path {
            self.default_path = value;
        }
    }
}

fn default_init_path() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Archive destination; falls back to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl PackageConfig {
    fn merge(&mut self, patch: PackagePatch) {
        if let Some(value) = patch.output_dir {
            self.output_dir = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Binary looked up on `PATH` to decide whether to install.
    #[serde(default = "default_checker_binary")]
    pub binary: String,
    /// Install command, run once when the binary is missing.
    #[serde(default = "default_checker_install")]
    pub install: Vec<String>,
    /// Command that runs the checker.
    #[serde(default = "default_checker_command")]
    pub command: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            binary: default_checker_binary(),
            install: default_checker_install(),
            command: default_checker_command(),
        }
    }
}

impl CheckerConfig {
    fn merge(&mut self, patch: CheckerPatch) {
        if let Some(value) = patch.binary {
            self.binary = value;
        }
        if let Some(value) = patch.install.filter(|argv| !argv.is_empty()) {
            self.install = value;
        }
        if let Some(value) = patch.command.filter(|argv| !argv.is_empty()) {
            self.command = value;
        }
    }
}

fn default_checker_binary() -> String {
    "cargo-semver-checks".to_string()
}

fn default_checker_install() -> Vec<String> {
    vec![
        "cargo".to_string(),
        "install".to_string(),
        "cargo-semver-checks".to_string(),
    ]
}

fn default_checker_command() -> Vec<String> {
    vec!["cargo".to_string(), "semver-checks".to_string()]
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub init: Option<InitPatch>,
    pub package: Option<PackagePatch>,
    pub checker: Option<CheckerPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InitPatch {
    pub default_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PackagePatch {
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CheckerPatch {
    pub binary: Option<String>,
    pub install: Option<Vec<String>>,
    pub command: Option<Vec<String>>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn split_command(value: &str) -> Option<Vec<String>> {
    let argv = value
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if argv.is_empty() { None } else { Some(argv) }
}
