//! File type resolution by extension.

use std::path::Path;

pub const FALLBACK_MIME: &str = "application/octet-stream";
pub const PDF_MIME: &str = "application/pdf";

/// Maps a file extension (with or without the leading dot, any case) to a
/// MIME type. Unknown extensions fall back to `application/octet-stream`.
pub fn mime_for_extension(extension: &str) -> &'static str {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => FALLBACK_MIME,
    }
}

/// Extension of `path` without the dot. A dotfile such as `.png` has no
/// stem, so its whole name after the dot is taken as the extension.
fn extension_of(path: &Path) -> Option<&str> {
    match path.extension() {
        Some(extension) => extension.to_str(),
        None => path
            .file_name()?
            .to_str()?
            .strip_prefix('.')
            .filter(|rest| !rest.is_empty()),
    }
}

/// Kinds of input the extractor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
}

impl DocumentKind {
    /// Classifies a path by its extension, returning `None` for anything
    /// that is neither a supported image nor a PDF.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = extension_of(path)?;
        if extension.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else if mime_for_extension(extension) != FALLBACK_MIME {
            Some(Self::Image)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "PDF",
        }
    }

    /// MIME type sent alongside the file bytes.
    pub fn mime_type(self, path: &Path) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Image => extension_of(path)
                .map(mime_for_extension)
                .unwrap_or(FALLBACK_MIME),
        }
    }
}
