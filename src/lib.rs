pub mod app;
pub mod bundler;
pub mod checker;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod skill_md;
pub mod templates;
#[cfg(test)]
pub mod test_utils;

pub use error::{KitError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
