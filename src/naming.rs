//! Name derivation for renumbered files
//!
//! The index prefix comes from the entry's position in the raw directory
//! listing. The remainder of the new name is what is left of a space-split
//! string after dropping its leading tokens. Which string gets split is
//! controlled by [`SplitMode`]:
//!
//! - [`SplitMode::FullPath`] splits the whole joined path, directory included.
//!   A directory such as `/data/my sounds` contributes its own tokens and
//!   shifts what survives. This is the default and matches how existing
//!   collections were numbered.
//! - [`SplitMode::FileName`] splits only the filename, so the result no
//!   longer depends on where the directory lives.

use crate::error::Result;
#[cfg(not(unix))]
use crate::error::RenameError;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

/// Number of leading space-separated tokens dropped by default.
pub const DEFAULT_SKIP_TOKENS: usize = 2;

/// Width of the zero-padded index prefix.
pub const PREFIX_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    #[default]
    FullPath,
    FileName,
}

impl SplitMode {
    pub fn name(&self) -> &'static str {
        match self {
            SplitMode::FullPath => "full-path",
            SplitMode::FileName => "file-name",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "full-path" => Ok(SplitMode::FullPath),
            "file-name" => Ok(SplitMode::FileName),
            other => Err(format!(
                "unknown split mode '{}' (expected full-path or file-name)",
                other
            )),
        }
    }
}

/// Drop the first `skip` space-separated tokens of `text` and rejoin the rest.
///
/// Splitting is on single `' '` characters, so consecutive spaces produce
/// empty tokens that are counted and preserved. With `skip` or fewer tokens
/// the result is empty.
pub fn strip_leading_tokens(text: &str, skip: usize) -> String {
    text.split(' ').skip(skip).collect::<Vec<_>>().join(" ")
}

pub fn sequence_prefix(index: usize) -> String {
    format!("{:0width$}", index, width = PREFIX_WIDTH)
}

/// `"NNN <old_name>"`. An empty `old_name` still gets the separating space.
pub fn new_filename(index: usize, old_name: &OsStr) -> OsString {
    let mut name = OsString::from(sequence_prefix(index));
    name.push(" ");
    name.push(old_name);
    name
}

/// [`strip_leading_tokens`] over raw name bytes, so names that are not
/// UTF-8 are split the same way.
#[cfg(unix)]
pub fn strip_leading_tokens_os(text: &OsStr, skip: usize) -> Result<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let kept: Vec<&[u8]> = text.as_bytes().split(|b| *b == b' ').skip(skip).collect();
    Ok(OsString::from_vec(kept.join(&b' ')))
}

#[cfg(not(unix))]
pub fn strip_leading_tokens_os(text: &OsStr, skip: usize) -> Result<OsString> {
    let text = text.to_str().ok_or_else(|| RenameError::encoding(text))?;
    Ok(strip_leading_tokens(text, skip).into())
}

/// Whether `name` ends with `suffix`, compared byte-wise on unix.
#[cfg(unix)]
pub fn has_suffix(name: &OsStr, suffix: &str) -> Result<bool> {
    use std::os::unix::ffi::OsStrExt;

    Ok(name.as_bytes().ends_with(suffix.as_bytes()))
}

#[cfg(not(unix))]
pub fn has_suffix(name: &OsStr, suffix: &str) -> Result<bool> {
    match name.to_str() {
        Some(name) => Ok(name.ends_with(suffix)),
        None if name.to_string_lossy().ends_with(suffix) => Err(RenameError::encoding(name)),
        None => Ok(false),
    }
}

/// Compute the kept part of the old name for the given mode.
pub fn derive_old_name(
    mode: SplitMode,
    old_path: &OsStr,
    file_name: &OsStr,
    skip: usize,
) -> Result<OsString> {
    match mode {
        SplitMode::FullPath => strip_leading_tokens_os(old_path, skip),
        SplitMode::FileName => strip_leading_tokens_os(file_name, skip),
    }
}
