//! Loading a source file into memory for extraction.

use crate::mime::DocumentKind;
use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A validated image or PDF read fully into memory.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Document {
    /// Checks that `path` is an existing file with a supported extension,
    /// then reads it.
    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(Error::FileNotFound(path.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        }

        let kind = DocumentKind::from_path(path).ok_or_else(|| {
            Error::UnsupportedFileType(
                path.extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_else(|| path.display().to_string()),
            )
        })?;

        tracing::info!("Reading {} file: {}", kind.label(), path.display());
        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            mime_type: kind.mime_type(path),
            bytes,
        })
    }

    /// Final path component, for status messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
