use super::client::GeminiHttpClient;
use super::{interpret, request};
use crate::ai::OcrService;
use crate::config::Config;
use crate::document::Document;
use crate::Result;
use async_trait::async_trait;

/// Text extraction backed by Gemini `generateContent`.
pub struct GeminiOcrClient {
    http: GeminiHttpClient,
}

impl GeminiOcrClient {
    pub fn new(http: GeminiHttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GeminiHttpClient::new(config.api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout),
        )
    }
}

#[async_trait]
impl OcrService for GeminiOcrClient {
    async fn extract_text(&self, document: &Document) -> Result<String> {
        tracing::debug!(
            "Extracting text from {} ({} bytes, {}) via Gemini model {}",
            document.file_name(),
            document.bytes.len(),
            document.mime_type,
            self.http.model()
        );

        let request =
            request::extraction_request(document.kind, &document.bytes, document.mime_type);
        let response = self.http.generate_content(&request).await?;
        let text = interpret::extract_text(&response)?;

        tracing::info!("Extracted {} characters of text", text.chars().count());
        Ok(text)
    }
}
