//! Skill packaging: validate a skill folder and write it into a `.skill` zip.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::core::validate::validate_skill;
use crate::error::{KitError, Result};

/// Extension of packaged skill archives.
pub const ARCHIVE_EXTENSION: &str = "skill";

/// What `package_skill` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub skill_name: String,
    /// Absolute path of the archive.
    pub archive: PathBuf,
    /// Archive entry names in the order they were written.
    pub entries: Vec<String>,
}

/// A regular file scheduled for the archive.
#[derive(Debug, Clone)]
struct ArchiveEntry {
    source: PathBuf,
    name: String,
}

/// Package `skill_path` into `<output_dir>/<skill-name>.skill`.
///
/// The skill must pass validation first; nothing is written otherwise.
/// `output_dir` defaults to the current working directory and is created if
/// missing. Entries are rooted at the skill folder name. An existing archive
/// at the target path is overwritten.
pub fn package_skill(skill_path: &Path, output_dir: Option<&Path>) -> Result<PackageReport> {
    let skill_dir = resolve_skill_dir(skill_path)?;

    let report = validate_skill(&skill_dir)?;
    if !report.valid {
        return Err(KitError::ValidationFailed(report.message));
    }
    info!(path = %skill_dir.display(), "{}", report.message);

    let skill_name = skill_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| KitError::InvalidSkillName(skill_dir.display().to_string()))?;

    let output_dir = resolve_output_dir(output_dir)?;
    let archive = output_dir.join(format!("{skill_name}.{ARCHIVE_EXTENSION}"));

    let entries = collect_entries(&skill_dir, &archive)?;
    if let Err(err) = write_archive(&archive, &entries) {
        if let Err(cleanup) = fs::remove_file(&archive) {
            warn!(path = %archive.display(), error = %cleanup, "could not remove partial archive");
        }
        return Err(err);
    }

    info!(archive = %archive.display(), entries = entries.len(), "packaged skill");
    Ok(PackageReport {
        skill_name,
        archive,
        entries: entries.into_iter().map(|entry| entry.name).collect(),
    })
}

fn resolve_skill_dir(skill_path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(skill_path)?;
    if !absolute.exists() {
        return Err(KitError::SkillNotFound(absolute));
    }
    let canonical = fs::canonicalize(&absolute)?;
    if !canonical.is_dir() {
        return Err(KitError::NotADirectory(absolute));
    }
    Ok(canonical)
}

fn resolve_output_dir(output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => std::env::current_dir()?,
    };
    Ok(fs::canonicalize(dir)?)
}

/// Walk every regular file under `skill_dir`, naming each relative to the
/// skill's parent with `/` separators. `exclude` is skipped so an archive
/// written inside the skill never packs itself.
fn collect_entries(skill_dir: &Path, exclude: &Path) -> Result<Vec<ArchiveEntry>> {
    let root = skill_dir.parent().unwrap_or(skill_dir);
    let mut entries = Vec::new();

    for item in WalkDir::new(skill_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let item = item?;
        if !item.file_type().is_file() || item.path() == exclude {
            continue;
        }
        let relative = item.path().strip_prefix(root).map_err(|_| {
            KitError::Io(io::Error::other(format!(
                "{} is outside {}",
                item.path().display(),
                root.display()
            )))
        })?;
        entries.push(ArchiveEntry {
            source: item.path().to_path_buf(),
            name: archive_name(relative),
        });
    }

    Ok(entries)
}

fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn write_archive(archive: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(archive)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    for entry in entries {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(file_mode(&entry.source)?);
        zip.start_file(entry.name.as_str(), options)?;
        let mut source = File::open(&entry.source)?;
        io::copy(&mut source, &mut zip)?;
        debug!(entry = %entry.name, "added archive entry");
    }

    let mut writer = zip.finish()?;
    io::Write::flush(&mut writer)?;
    Ok(())
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    Ok(fs::metadata(path)?.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Result<u32> {
    Ok(0o644)
}
