//! Structural and metadata validation of a skill directory.
//!
//! Checks run in a fixed order and the first unmet condition is reported;
//! errors are never aggregated.

use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

use crate::error::Result;
use crate::skill_md::{ALLOWED_KEYS, FrontmatterError, SKILL_FILE, SkillFrontmatter, split_frontmatter};

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Message reported for a skill that passes every check.
pub const VALID_MESSAGE: &str = "Skill is valid!";

/// Outcome of validating one skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub message: String,
}

impl ValidationReport {
    fn pass() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validate a skill directory.
///
/// A failed check is an `Ok` report with `valid == false`; `Err` is reserved
/// for I/O failures while reading SKILL.md.
pub fn validate_skill(skill_dir: &Path) -> Result<ValidationReport> {
    let report = match first_failure(skill_dir)? {
        Some(message) => ValidationReport::fail(message),
        None => ValidationReport::pass(),
    };
    debug!(path = %skill_dir.display(), valid = report.valid, message = %report.message, "validated skill");
    Ok(report)
}

fn first_failure(skill_dir: &Path) -> Result<Option<String>> {
    if !skill_dir.exists() {
        return Ok(Some(format!("Skill folder not found: {}", skill_dir.display())));
    }
    if !skill_dir.is_dir() {
        return Ok(Some(format!("Path is not a directory: {}", skill_dir.display())));
    }

    let skill_md = skill_dir.join(SKILL_FILE);
    if !skill_md.is_file() {
        return Ok(Some(format!("{SKILL_FILE} not found")));
    }

    let Ok(content) = String::from_utf8(std::fs::read(&skill_md)?) else {
        return Ok(Some(format!("{SKILL_FILE} is not valid UTF-8")));
    };
    let doc = match split_frontmatter(&content) {
        Ok(doc) => doc,
        Err(FrontmatterError::Missing) => return Ok(Some("No YAML frontmatter found".into())),
        Err(FrontmatterError::Unterminated) => {
            return Ok(Some("Invalid frontmatter format".into()));
        }
    };

    let header: Value = match serde_yaml::from_str(doc.frontmatter) {
        Ok(value) => value,
        Err(err) => return Ok(Some(format!("Invalid YAML in frontmatter: {err}"))),
    };
    let Value::Mapping(header) = header else {
        return Ok(Some("Frontmatter must be a YAML dictionary".into()));
    };

    let mut unexpected = header
        .keys()
        .map(key_label)
        .filter(|key| !ALLOWED_KEYS.contains(&key.as_str()))
        .collect::<Vec<_>>();
    if !unexpected.is_empty() {
        unexpected.sort();
        let mut allowed = ALLOWED_KEYS.to_vec();
        allowed.sort_unstable();
        return Ok(Some(format!(
            "Unexpected key(s) in {SKILL_FILE} frontmatter: {}. Allowed properties are: {}",
            unexpected.join(", "),
            allowed.join(", ")
        )));
    }

    for key in ["name", "description"] {
        if let Some(message) = check_required_string(&header, key) {
            return Ok(Some(message));
        }
    }

    let frontmatter: SkillFrontmatter = match serde_yaml::from_value(Value::Mapping(header)) {
        Ok(frontmatter) => frontmatter,
        Err(err) => return Ok(Some(format!("Invalid frontmatter field: {err}"))),
    };

    Ok(check_name_format(frontmatter.name.trim())
        .or_else(|| check_description_format(frontmatter.description.trim())))
}

/// A required header field must be a non-empty string.
fn check_required_string(header: &serde_yaml::Mapping, key: &str) -> Option<String> {
    match header.get(key) {
        None | Some(Value::Null) => Some(format!("Missing '{key}' in frontmatter")),
        Some(Value::String(value)) if value.trim().is_empty() => {
            Some(format!("Field '{key}' in frontmatter must not be empty"))
        }
        Some(Value::String(_)) => None,
        Some(other) => Some(format!(
            "Field '{key}' in frontmatter must be a string, got {}",
            type_label(other)
        )),
    }
}

/// Hyphen-case rules for a skill name; `None` when the name conforms.
#[must_use]
pub fn check_name_format(name: &str) -> Option<String> {
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some(format!(
            "Name '{name}' should be hyphen-case (lowercase letters, digits, and hyphens only)"
        ));
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Some(format!(
            "Name '{name}' cannot start/end with hyphen or contain consecutive hyphens"
        ));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Some(format!(
            "Name is too long ({len} characters). Maximum is {MAX_NAME_LEN} characters."
        ));
    }
    None
}

/// Content rules for a description; `None` when it conforms.
#[must_use]
pub fn check_description_format(description: &str) -> Option<String> {
    if description.contains(['<', '>']) {
        return Some("Description cannot contain angle brackets (< or >)".to_string());
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Some(format!(
            "Description is too long ({len} characters). Maximum is {MAX_DESCRIPTION_LEN} characters."
        ));
    }
    None
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| type_label(other).to_string()),
    }
}

const fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
