//! Rename Audio Files - renumber `.wav` files by directory listing position
//!
//! Each matching file gets a three-digit prefix equal to its 0-based
//! position in the raw directory listing.

pub mod config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod renamer;

pub use config::{Args, Config};
pub use error::{RenameError, Result};
pub use fs::{FileSystem, LocalFileSystem};
pub use naming::SplitMode;
pub use renamer::{rename_wav_files, RenameReport, RenamedFile, Renamer};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Logs go to stderr; stdout carries only the rename lines.
pub fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}
