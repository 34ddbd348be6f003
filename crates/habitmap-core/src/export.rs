//! PNG export and output artifacts.

use chrono::Utc;
use resvg::tiny_skia::Pixmap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{CoreError, RenderError, Result};

/// Encode a finished canvas as PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

/// File name that cannot collide with a concurrent render:
/// `<prefix>_<unix-seconds>_<uuid>.png`.
pub fn unique_file_name(prefix: &str) -> String {
    format!(
        "{}_{}_{}.png",
        prefix,
        Utc::now().timestamp(),
        Uuid::new_v4().simple()
    )
}

/// Write PNG bytes to `path`.
///
/// # Errors
///
/// Returns [`CoreError::WriteFailed`] if the destination cannot be written.
pub fn write_artifact(path: &Path, png: &[u8]) -> Result<Artifact> {
    std::fs::write(path, png).map_err(|source| CoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} bytes to {}", png.len(), path.display());
    Ok(Artifact {
        path: path.to_path_buf(),
        bytes: png.len(),
    })
}

/// A rendered image on disk. The caller deletes it once delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: usize,
}

impl Artifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn remove(self) -> Result<()> {
        std::fs::remove_file(&self.path)?;
        tracing::debug!("Removed {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_differ() {
        let a = unique_file_name("stats");
        let b = unique_file_name("stats");
        assert_ne!(a, b);
        assert!(a.starts_with("stats_"));
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn test_write_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let artifact = write_artifact(&path, b"png").unwrap();
        assert_eq!(artifact.bytes, 3);
        assert!(path.exists());
        artifact.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = write_artifact(&path, b"png").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_encode_png_signature() {
        let pixmap = Pixmap::new(2, 2).unwrap();
        let png = encode_png(&pixmap).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }
}
