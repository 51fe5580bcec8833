//! Renumbering pass over a single directory
//!
//! The pass lists the directory once, then walks the listing in order. Each
//! entry consumes one index whether or not it is renamed, so the prefix of a
//! renamed file is its position in the raw listing. The first failure stops
//! the pass; renames already performed are kept.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{RenameError, Result};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::naming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub index: usize,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

/// Outcome of one pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<RenamedFile>,
    pub skipped: usize,
    pub error: Option<RenameError>,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Renamer<F: FileSystem = LocalFileSystem> {
    config: Config,
    fs: F,
}

impl Renamer<LocalFileSystem> {
    pub fn new(config: Config) -> Self {
        Self::with_fs(config, LocalFileSystem)
    }
}

impl<F: FileSystem> Renamer<F> {
    pub fn with_fs(config: Config, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one pass over `directory`, writing progress lines to `out`.
    ///
    /// Never returns an error: a failure ends the pass, is written to `out`
    /// as `An error occurred: <message>` and kept in the report.
    pub fn rename_wav_files<W: Write>(&self, directory: &Path, out: &mut W) -> RenameReport {
        let mut report = RenameReport::default();

        if let Err(e) = self.run_pass(directory, out, &mut report) {
            log::debug!(
                "Pass over {} stopped after {} renames",
                directory.display(),
                report.renamed.len()
            );
            // Nothing left to report to if the output itself is broken
            let _ = writeln!(out, "An error occurred: {}", e);
            report.error = Some(e);
        }

        report
    }

    fn run_pass<W: Write>(
        &self,
        directory: &Path,
        out: &mut W,
        report: &mut RenameReport,
    ) -> Result<()> {
        let entries = self.fs.list_dir(directory).map_err(|source| RenameError::ListDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
        log::debug!("Listed {} entries in {}", entries.len(), directory.display());

        for (index, entry) in entries.iter().enumerate() {
            if !naming::has_suffix(entry, self.config.suffix())? {
                log::debug!("Skipping {}", entry.to_string_lossy());
                report.skipped += 1;
                continue;
            }

            let renamed = self.rename_entry(directory, index, entry)?;
            let verb = if self.config.dry_run() { "Would rename" } else { "Renamed" };
            writeln!(
                out,
                "{} {} to {}",
                verb,
                renamed.old_path.display(),
                renamed.new_path.display()
            )?;
            report.renamed.push(renamed);
        }

        Ok(())
    }

    fn rename_entry(
        &self,
        directory: &Path,
        index: usize,
        file_name: &OsStr,
    ) -> Result<RenamedFile> {
        let old_path = self.fs.join(directory, file_name);

        let old_name = naming::derive_old_name(
            self.config.split_mode(),
            old_path.as_os_str(),
            file_name,
            self.config.skip_tokens(),
        )?;
        let new_filename = naming::new_filename(index, &old_name);
        let new_path = self.fs.join(directory, &new_filename);

        if !self.config.dry_run() {
            self.fs.rename(&old_path, &new_path).map_err(|source| RenameError::Rename {
                from: old_path.clone(),
                to: new_path.clone(),
                source,
            })?;
        }
        log::debug!(
            "[{}] {} -> {}",
            index,
            file_name.to_string_lossy(),
            new_filename.to_string_lossy()
        );

        Ok(RenamedFile { index, old_path, new_path })
    }
}

/// Renumber `.wav` files in `directory` with default settings, printing to stdout.
pub fn rename_wav_files<P: AsRef<Path>>(directory: P) -> RenameReport {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Renamer::new(Config::default()).rename_wav_files(directory.as_ref(), &mut out)
}
