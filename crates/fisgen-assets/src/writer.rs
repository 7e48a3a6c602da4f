//! File output. The renderer only produces strings; this is the collaborator
//! that puts them on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};

/// Write `text` to `directory/name`, creating or truncating the file.
/// The directory must already exist. Returns the written path.
pub fn create_file(name: &str, directory: &Path, text: &str) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(AssetError::MissingDirectory(directory.to_path_buf()));
    }

    let path = directory.join(name);
    fs::write(&path, text)?;
    tracing::debug!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_and_truncates() {
        let dir = tempfile::tempdir().unwrap();

        let path = create_file("files", dir.path(), "first\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        create_file("files", dir.path(), "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_missing_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = create_file("files", &missing, "text").unwrap_err();
        assert!(matches!(err, AssetError::MissingDirectory(_)));
    }
}
