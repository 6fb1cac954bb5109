//! SKILL.md description file handling.
//!
//! A SKILL.md starts with a `---` delimited YAML header followed by free-form
//! markdown. This module splits the two apart and exposes the typed header.
//! The scaffold templates live in [`templates`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod templates;

/// File name of the description file inside a skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Header keys a SKILL.md may declare.
pub const ALLOWED_KEYS: &[&str] = &["name", "description", "license", "allowed-tools", "metadata"];

/// Why a header block could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// Content does not open with `---`.
    Missing,
    /// Opening delimiter without a closing `---` line.
    Unterminated,
}

/// A SKILL.md split into its raw YAML header and markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDocument<'a> {
    pub frontmatter: &'a str,
    pub body: &'a str,
}

/// Split SKILL.md content into header and body.
///
/// The closing delimiter must sit on its own line; the body is whatever
/// follows that line.
pub fn split_frontmatter(content: &str) -> Result<SkillDocument<'_>, FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content.strip_prefix("---") else {
        return Err(FrontmatterError::Missing);
    };
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(FrontmatterError::Unterminated)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let frontmatter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok(SkillDocument { frontmatter, body });
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}

/// Typed SKILL.md header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillFrontmatter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(
        default,
        rename = "allowed-tools",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_tools: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_yaml::Value>>,
}
