//! Rendering of the files a new skill is scaffolded with.

use std::path::PathBuf;

use crate::skill_md::SKILL_FILE;
use crate::skill_md::templates::{EXAMPLE_ASSET, EXAMPLE_REFERENCE, EXAMPLE_SCRIPT, SKILL_TEMPLATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub skill_name: String,
    pub skill_title: String,
}

impl TemplateContext {
    #[must_use]
    pub fn new(skill_name: &str) -> Self {
        Self {
            skill_name: skill_name.to_string(),
            skill_title: title_case_skill_name(skill_name),
        }
    }

    /// Substitute `{{skill_name}}` and `{{skill_title}}` in a template body.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{skill_name}}", &self.skill_name)
            .replace("{{skill_title}}", &self.skill_title)
    }
}

/// One file written into a freshly scaffolded skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the skill directory.
    pub path: PathBuf,
    pub body: String,
    pub executable: bool,
}

/// Example resource files, one per resource directory.
#[must_use]
pub fn resource_files(ctx: &TemplateContext) -> Vec<ScaffoldFile> {
    vec![
        ScaffoldFile {
            path: PathBuf::from("scripts/example.py"),
            body: ctx.render(EXAMPLE_SCRIPT),
            executable: true,
        },
        ScaffoldFile {
            path: PathBuf::from("references/api_reference.md"),
            body: ctx.render(EXAMPLE_REFERENCE),
            executable: false,
        },
        ScaffoldFile {
            path: PathBuf::from("assets/example_asset.txt"),
            body: ctx.render(EXAMPLE_ASSET),
            executable: false,
        },
    ]
}

/// The SKILL.md description file.
#[must_use]
pub fn skill_file(ctx: &TemplateContext) -> ScaffoldFile {
    ScaffoldFile {
        path: PathBuf::from(SKILL_FILE),
        body: ctx.render(SKILL_TEMPLATE),
        executable: false,
    }
}

/// Convert a hyphenated skill name to Title Case for display.
///
/// Every hyphen-separated word gets an upper-case first character and a
/// lower-case remainder: `pdf-API-tools` becomes `Pdf Api Tools`.
#[must_use]
pub fn title_case_skill_name(skill_name: &str) -> String {
    skill_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
