//! Atomic output writes.
//!
//! Outputs are written to a temporary file next to the target, synced, and
//! renamed over the target, so a failed run never leaves a half-written
//! document behind. On crash a `.{filename}.tmp` file may remain.

use crate::error::{PropgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| PropgenError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PropgenError::io(path, e)
    })
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// `.{filename}.tmp` in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PropgenError::Config(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| PropgenError::io(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            PropgenError::io(path, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("progetto-completo.md");

        atomic_write_file(&file_path, "# Titolo\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "# Titolo\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("README.md");
        fs::write(&file_path, "old document").unwrap();

        atomic_write(&file_path, b"new document").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new document");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out").join("debug").join("dump.json");

        atomic_write(&file_path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("doc.md");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".doc.md.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/path/doc.md")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.doc.md.tmp"));

        let temp = temp_path_for(Path::new("doc.md")).unwrap();
        assert_eq!(temp, Path::new(".doc.md.tmp"));
    }

    #[test]
    fn test_write_into_file_as_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write(blocker.join("doc.md"), b"x").unwrap_err();
        assert!(matches!(err, PropgenError::Io { .. }));
    }
}
