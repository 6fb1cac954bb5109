//! Core skill lifecycle: scaffold and validate

pub mod scaffold;
pub mod validate;

pub use scaffold::{ScaffoldReport, init_skill};
pub use validate::{ValidationReport, validate_skill};
