//! AI service integration for text extraction
//!
//! Provides the [`OcrService`] seam used by the application, with a Gemini
//! implementation and a scripted mock for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiOcrClient;
pub use mock::MockOcrClient;

use crate::document::Document;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OcrService: Send + Sync {
    /// Extracts the text contained in `document`.
    async fn extract_text(&self, document: &Document) -> Result<String>;
}
