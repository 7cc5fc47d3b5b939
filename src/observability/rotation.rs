//! Append-only file that rotates into numbered backups.
//!
//! When the active file grows past [`MAX_FILE_SIZE_BYTES`], backups shift up
//! (`.1` → `.2`, ...), the oldest beyond [`MAX_BACKUP_FILES`] is dropped, and
//! the active file becomes `.1`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size threshold checked before each append (5 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept next to the active file.
pub const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, MAX_FILE_SIZE_BYTES)
    }

    pub const fn with_limit(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening, or writing, and an
    /// `Other` error if the lock was poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            rotate(&self.path)?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes)
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

fn rotate(path: &Path) -> io::Result<()> {
    let oldest = backup_path(path, MAX_BACKUP_FILES);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for index in (1..MAX_BACKUP_FILES).rev() {
        let from = backup_path(path, index);
        if from.exists() {
            fs::rename(&from, backup_path(path, index + 1))?;
        }
    }

    if path.exists() {
        fs::rename(path, backup_path(path, 1))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limit(path.clone(), 4);

        file.append_line("first").unwrap();
        file.append_line("second").unwrap();
        file.append_line("third").unwrap();

        assert_eq!(read(&path), "third\n");
        assert_eq!(read(&backup_path(&path, 1)), "second\n");
        assert_eq!(read(&backup_path(&path, 2)), "first\n");
    }

    #[test]
    fn test_drops_backups_beyond_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limit(path.clone(), 1);

        for i in 0..=MAX_BACKUP_FILES + 1 {
            file.append_line(&format!("line {i}")).unwrap();
        }

        assert_eq!(read(&path), format!("line {}\n", MAX_BACKUP_FILES + 1));
        assert_eq!(read(&backup_path(&path, MAX_BACKUP_FILES)), "line 1\n");
        assert!(!backup_path(&path, MAX_BACKUP_FILES + 1).exists());
    }
}
