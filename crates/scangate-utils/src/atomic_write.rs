//! Atomic file writes for the result document.
//!
//! The result document is written exactly once per run, as a temp file
//! in the target directory followed by fsync and rename. Concurrent
//! per-architecture gate runs own disjoint result paths, so a reader
//! never observes a partially written document.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

/// Atomically write content to a file using temp file + fsync + rename.
///
/// The parent directory is created if it does not exist. The temp file
/// is created in the target's own directory so the final rename stays
/// on one filesystem.
pub fn write_file_atomic(path: &Utf8Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create parent directory: {parent}"))?;
    }

    let temp_dir = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let mut temp_file = NamedTempFile::new_in(temp_dir)
        .with_context(|| format!("Failed to create temporary file in: {temp_dir}"))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write content to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .with_context(|| "Failed to fsync temporary file")?;

    temp_file
        .persist(path.as_std_path())
        .map_err(|e| anyhow::anyhow!(e.error))
        .with_context(|| format!("Failed to atomically write file: {path}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_basic() {
        let temp_dir = TempDir::new().unwrap();
        let path_buf = temp_dir.path().join("result.json");
        let file_path = Utf8Path::from_path(path_buf.as_path()).unwrap();

        let content = r#"{"block":false}"#;
        write_file_atomic(file_path, content).unwrap();

        assert!(file_path.exists());
        let read_content = fs::read_to_string(file_path.as_std_path()).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path_buf = temp_dir.path().join("nested").join("dir").join("result.json");
        let nested_path = Utf8Path::from_path(path_buf.as_path()).unwrap();

        write_file_atomic(nested_path, "{}").unwrap();
        assert!(nested_path.exists());
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path_buf = temp_dir.path().join("overwrite.json");
        let file_path = Utf8Path::from_path(path_buf.as_path()).unwrap();

        write_file_atomic(file_path, "first").unwrap();
        write_file_atomic(file_path, "second").unwrap();

        let read_content = fs::read_to_string(file_path.as_std_path()).unwrap();
        assert_eq!(read_content, "second");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path_buf = temp_dir.path().join("clean.json");
        let file_path = Utf8Path::from_path(path_buf.as_path()).unwrap();

        write_file_atomic(file_path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
