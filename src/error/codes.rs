//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Skill errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors
//! - 88x: External tool errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `SkillExists` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Skill errors (1xx)
    // ========================================
    /// E101: A skill directory already exists at the target
    SkillExists,
    /// E102: Skill folder does not exist
    SkillNotFound,
    /// E103: Skill path is not a directory
    SkillNotDirectory,
    /// E104: Skill name cannot be used as a directory name
    SkillNameInvalid,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Filesystem operation failed
    IoError,
    /// E602: Archive could not be written
    ArchiveError,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Skill failed structural or metadata validation
    ValidationFailed,

    // ========================================
    // External tool errors (88x)
    // ========================================
    /// E881: External tool missing and could not be installed
    ToolInstallFailed,
    /// E882: External tool could not be run
    ToolFailed,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SkillExists` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SkillExists => 101,
            Self::SkillNotFound => 102,
            Self::SkillNotDirectory => 103,
            Self::SkillNameInvalid => 104,

            Self::ConfigInvalid => 301,

            Self::IoError => 601,
            Self::ArchiveError => 602,
            Self::SerializationError => 605,

            Self::ValidationFailed => 801,

            Self::ToolInstallFailed => 881,
            Self::ToolFailed => 882,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SkillExists => "Choose a different skill name or remove the existing directory first",
            Self::SkillNotFound => "Check the skill folder path. Create a new skill with `skillkit init <name> --path <dir>`",
            Self::SkillNotDirectory => "Pass the skill folder, not the SKILL.md file or an archive",
            Self::SkillNameInvalid => "Use a hyphen-case name such as `my-new-skill`",

            Self::ConfigInvalid => "Check TOML syntax in the config file, or pass --config <path>",

            Self::IoError => "File operation failed. Check path exists and permissions are correct",
            Self::ArchiveError => "Check disk space and write permissions on the output directory",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::ValidationFailed => "Fix the reported issue in SKILL.md and run `skillkit validate <dir>` again",

            Self::ToolInstallFailed => "Install the tool manually (e.g. `cargo install cargo-semver-checks`) and retry",
            Self::ToolFailed => "Check that the tool and cargo are on PATH",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "skill",
            3 => "config",
            6 => "storage",
            8 if self.numeric() >= 880 => "tool",
            8 => "validation",
            _ => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
