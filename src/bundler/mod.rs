//! Skill bundler for packaging and distribution

pub mod package;

pub use package::{ARCHIVE_EXTENSION, PackageReport, package_skill};
