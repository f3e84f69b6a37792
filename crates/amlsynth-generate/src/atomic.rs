//! Durable file replacement: write a sibling temp file, fsync, rename.

use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{GenerationError, Result};

pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    write_bytes_atomic(path, &data)
}

pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let staged = staging_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&staged)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&staged, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    Ok(())
}

fn staging_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::Store(format!("cannot write '{}': no file name", path.display()))
    })?;
    Ok(path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_file_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("pool.json");
        write_json_atomic(&path, &vec!["A1"]).expect("first write");
        write_json_atomic(&path, &vec!["A1", "A2"]).expect("second write");

        let stored: Vec<String> =
            serde_json::from_slice(&std::fs::read(&path).expect("read")).expect("parse");
        assert_eq!(stored, vec!["A1", "A2"]);
        assert!(!dir.path().join("nested").join("pool.json.tmp").exists());
    }
}
