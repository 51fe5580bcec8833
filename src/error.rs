//! Error Types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type.
///
/// Every failure during a pass ends up here; the renamer does not treat one
/// variant differently from another, the variants only carry message context.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Failed to list directory {}: {source}", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Path is not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RenameError {
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn encoding<P: Into<PathBuf>>(path: P) -> Self { Self::Encoding { path: path.into() } }
}

pub type Result<T> = std::result::Result<T, RenameError>;
