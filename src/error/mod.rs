//! Error handling for skillkit.
//!
//! This module provides:
//! - [`KitError`]: The main error enum for all skillkit operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error type for robot mode

mod codes;

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for skillkit operations.
#[derive(Error, Debug)]
pub enum KitError {
    #[error("Skill directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Skill folder not found: {}", .0.display())]
    SkillNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid skill name: {0}")]
    InvalidSkillName(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to install {tool}: {reason}")]
    ToolInstallFailed { tool: String, reason: String },

    #[error("Failed to run checker: {0}")]
    ToolFailed(String),
}

impl KitError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::AlreadyExists(_) => ErrorCode::SkillExists,
            Self::SkillNotFound(_) => ErrorCode::SkillNotFound,
            Self::NotADirectory(_) => ErrorCode::SkillNotDirectory,
            Self::InvalidSkillName(_) => ErrorCode::SkillNameInvalid,
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
            Self::Io(_) | Self::Walk(_) => ErrorCode::IoError,
            Self::Zip(_) => ErrorCode::ArchiveError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::ToolInstallFailed { .. } => ErrorCode::ToolInstallFailed,
            Self::ToolFailed(_) => ErrorCode::ToolFailed,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::AlreadyExists(path) | Self::SkillNotFound(path) | Self::NotADirectory(path) => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::InvalidSkillName(name) => Some(serde_json::json!({ "skill_name": name })),
            Self::ValidationFailed(reason) => Some(serde_json::json!({ "reason": reason })),
            Self::ToolInstallFailed { tool, reason } => {
                Some(serde_json::json!({ "tool": tool, "reason": reason }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_kit_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "SKILL_EXISTS")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "skill", "config", "tool")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_kit_error(err: &KitError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Result type alias using KitError.
pub type Result<T> = std::result::Result<T, KitError>;
