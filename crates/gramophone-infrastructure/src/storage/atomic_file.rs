//! Crash-safe whole-file replacement.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::StorageError;

/// A file that is only ever replaced as a whole.
///
/// - **Atomicity**: writes go to a sibling tmp file that is renamed over the target
/// - **Durability**: the tmp file is fsynced before the rename
/// - **Isolation**: read-modify-write cycles hold an exclusive lock file
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file; a missing or blank file reads as `None`.
    pub fn read(&self) -> Result<Option<String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    /// Replaces the file contents.
    pub fn write(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(contents.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Read-modify-write under an exclusive lock.
    ///
    /// `f` receives the current contents (if any) and returns the new contents.
    pub fn update<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(Option<String>) -> Result<String, StorageError>,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let current = self.read()?;
        let next = f(current)?;
        self.write(&next)
    }

    fn temp_path(&self) -> Result<PathBuf, StorageError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            StorageError::Unavailable(format!("{} has no file name", self.path.display()))
        })?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// Exclusive lock held for the lifetime of the guard.
///
/// The lock file stays on disk. Unlinking it would let a later writer lock a fresh
/// inode while another writer still holds the old one.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_and_blank_files_read_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("state.json"));
        assert!(file.read().unwrap().is_none());

        file.write("   \n").unwrap();
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn test_write_creates_parent_and_leaves_no_tmp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");
        let file = AtomicFile::new(path.clone());

        file.write("{}").unwrap();

        assert_eq!(file.read().unwrap().as_deref(), Some("{}"));
        assert!(!path.with_file_name(".state.json.tmp").exists());
    }

    #[test]
    fn test_update_sees_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("counter.txt"));

        for _ in 0..3 {
            file.update(|current| {
                let n: u32 = current.map(|c| c.trim().parse().unwrap_or(0)).unwrap_or(0);
                Ok((n + 1).to_string())
            })
            .unwrap();
        }

        assert_eq!(file.read().unwrap().as_deref(), Some("3"));
        assert!(temp_dir.path().join("counter.lock").exists());
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.txt");

        let writers: Vec<_> = (0..8)
            .map(|_| {
                let file = AtomicFile::new(path.clone());
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        file.update(|current| {
                            let n: u32 =
                                current.map(|c| c.trim().parse().unwrap_or(0)).unwrap_or(0);
                            Ok((n + 1).to_string())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(AtomicFile::new(path).read().unwrap().as_deref(), Some("80"));
    }
}
