//! Application orchestration for extracting text from one file.

use crate::ai::{GeminiOcrClient, OcrService};
use crate::config::Config;
use crate::document::Document;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs the load → extract sequence for a single file at a time.
pub struct App {
    ocr: Box<dyn OcrService>,
}

impl App {
    /// Build an app around any [`OcrService`], typically a mock in tests.
    pub fn with_service(ocr: Box<dyn OcrService>) -> Self {
        Self { ocr }
    }

    /// Construct an app backed by Gemini.
    pub fn new(config: &Config) -> Self {
        info!("OCR provider: Gemini (model: {})", config.model);
        Self::with_service(Box::new(GeminiOcrClient::from_config(config)))
    }

    /// Validates, reads and sends `path`, returning the extracted text.
    pub async fn process_file(&self, path: &Path) -> Result<String> {
        let document = Document::load(path).await?;
        info!("Processing {}: {}", document.kind.label(), document.file_name());

        let text = self.ocr.extract_text(&document).await?;
        info!("Text extraction complete");
        Ok(text)
    }

    /// Writes `text` to `path`, appending a `.txt` extension when the path
    /// has none (or ends in a bare dot). Returns the path actually written.
    pub async fn save_text(&self, path: &Path, text: &str) -> Result<PathBuf> {
        let target = if path.extension().map_or(true, |e| e.is_empty()) {
            path.with_extension("txt")
        } else {
            path.to_path_buf()
        };

        tokio::fs::write(&target, text).await?;
        info!("Text saved to {}", target.display());
        Ok(target)
    }
}
