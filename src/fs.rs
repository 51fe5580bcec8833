//! Filesystem access used by the renamer

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// The three filesystem operations a renaming pass needs.
pub trait FileSystem {
    /// Entry names of `dir` in the order the platform yields them.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Move `from` to `to` within the same directory. May overwrite `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn join(&self, dir: &Path, name: &OsStr) -> PathBuf {
        dir.join(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_list_and_rename() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.wav"), b"RIFF").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), b"notes").unwrap();

        let fs = LocalFileSystem;
        let mut names = fs.list_dir(temp_dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("a.wav"), OsString::from("b.txt")]);

        let from = fs.join(temp_dir.path(), OsStr::new("a.wav"));
        let to = fs.join(temp_dir.path(), OsStr::new("000 a.wav"));
        fs.rename(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(std::fs::read(&to).unwrap(), b"RIFF");
    }

    #[test]
    fn test_local_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = LocalFileSystem.list_dir(&missing).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_rename_keeps_order() {
        let fs = memory::MemoryFileSystem::new("/data", &["b.wav", "a.wav"]);
        fs.rename(Path::new("/data/a.wav"), Path::new("/data/001 a.wav")).unwrap();
        assert_eq!(fs.entries(), vec!["b.wav", "001 a.wav"]);
    }
}
