//! Skill scaffolding: create a new skill directory from templates.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{KitError, Result};
use crate::templates::{ScaffoldFile, TemplateContext, resource_files, skill_file};

/// What `init_skill` created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub skill_name: String,
    /// Absolute path of the new skill directory.
    pub skill_dir: PathBuf,
    /// Files written, relative to `skill_dir`, in creation order.
    pub files: Vec<PathBuf>,
}

/// Create `<base>/<skill_name>` populated with SKILL.md and example resources.
///
/// Fails without writing anything if the directory already exists. A failure
/// after the directory was created leaves it partially populated.
pub fn init_skill(skill_name: &str, base: &Path) -> Result<ScaffoldReport> {
    check_skill_name(skill_name)?;

    let base = resolve_base(base)?;
    let skill_dir = base.join(skill_name);

    if fs::symlink_metadata(&skill_dir).is_ok() {
        return Err(KitError::AlreadyExists(skill_dir));
    }

    fs::create_dir_all(&base)?;
    fs::create_dir(&skill_dir).map_err(|err| {
        if err.kind() == std::io::ErrorKind::AlreadyExists {
            KitError::AlreadyExists(skill_dir.clone())
        } else {
            KitError::Io(err)
        }
    })?;
    info!(path = %skill_dir.display(), "created skill directory");

    let ctx = TemplateContext::new(skill_name);
    let mut files = Vec::with_capacity(4);

    let description = skill_file(&ctx);
    write_scaffold_file(&skill_dir, &description)?;
    files.push(description.path);

    for file in resource_files(&ctx) {
        write_scaffold_file(&skill_dir, &file)?;
        files.push(file.path);
    }

    info!(skill = skill_name, files = files.len(), "skill initialized");
    Ok(ScaffoldReport {
        skill_name: skill_name.to_string(),
        skill_dir,
        files,
    })
}

/// Absolute form of `base`; an empty path means the working directory.
fn resolve_base(base: &Path) -> Result<PathBuf> {
    if base.as_os_str().is_empty() {
        return Ok(std::env::current_dir()?);
    }
    Ok(std::path::absolute(base)?)
}

/// Reject names that cannot be a single directory component.
fn check_skill_name(skill_name: &str) -> Result<()> {
    if skill_name.trim().is_empty() {
        return Err(KitError::InvalidSkillName(
            "skill name must not be empty".to_string(),
        ));
    }
    let mut components = Path::new(skill_name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || skill_name.contains(['/', '\\']) {
        return Err(KitError::InvalidSkillName(format!(
            "'{skill_name}' must be a plain directory name"
        )));
    }
    Ok(())
}

fn write_scaffold_file(skill_dir: &Path, file: &ScaffoldFile) -> Result<()> {
    let path = skill_dir.join(&file.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &file.body)?;
    if file.executable {
        make_executable(&path)?;
    }
    debug!(path = %path.display(), bytes = file.body.len(), "wrote scaffold file");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
