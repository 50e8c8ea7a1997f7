//! File system utilities for common operations.

use crate::utils::Result;
use log::debug;
use std::path::Path;
use tokio::fs;

/// Ensures a directory exists, creating it and all parent directories if necessary.
pub async fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !fs::try_exists(path).await? {
        fs::create_dir_all(path).await?;
        debug!("Created directory: {path:?}");
    }
    Ok(())
}

/// Ensures the parent directory of a file exists.
pub async fn ensure_parent_directory<P: AsRef<Path>>(file_path: P) -> Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        ensure_directory(parent).await?;
    }
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories first.
pub async fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_directory(path).await?;
    fs::write(path, contents).await?;
    debug!("Wrote {} bytes to {path:?}", contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_directory_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");

        ensure_directory(&dir).await.unwrap();
        ensure_directory(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn write_text_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("output").join("mcv.txt");

        write_text(&file, "1.21\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "1.21\n");
    }
}
