//! Template strings for scaffolding a new skill.
//!
//! Placeholders are `{{skill_name}}` (the hyphenated directory name) and
//! `{{skill_title}}` (its title-cased display form).

/// SKILL.md written at the root of a new skill.
pub const SKILL_TEMPLATE: &str = r#"---
name: {{skill_name}}
description: "[TODO: Complete and informative explanation of what the skill does and when to use it.]"
---

# {{skill_title}}

## Overview
[TODO: 1-2 sentences explaining what this skill enables]

## Structuring This Skill
[TODO: Choose the structure that best fits this skill's purpose. Patterns: Workflow-Based, Task-Based, Reference/Guidelines, Capabilities-Based.]

## Resources
This skill includes example resource directories:

### scripts/
Executable code for specific operations.

### references/
Documentation intended to be loaded into context as needed.

### assets/
Files used in the output Claude produces.
"#;

/// Placeholder helper script under `scripts/`.
pub const EXAMPLE_SCRIPT: &str = r#"#!/usr/bin/env python3
"""
Example helper script for {{skill_name}}
"""

def main():
    print("This is an example script for {{skill_name}}")

if __name__ == "__main__":
    main()
"#;

/// Placeholder reference document under `references/`.
pub const EXAMPLE_REFERENCE: &str = r#"# Reference Documentation for {{skill_title}}

This is a placeholder for detailed reference documentation.
"#;

/// Placeholder asset under `assets/`.
pub const EXAMPLE_ASSET: &str = r#"# Example Asset File

This placeholder represents where asset files would be stored.
"#;
