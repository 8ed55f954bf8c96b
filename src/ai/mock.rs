use super::OcrService;
use crate::document::Document;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted [`OcrService`] for tests: replays queued outcomes in order and
/// records the name of every document it sees.
pub struct MockOcrClient {
    responses: Arc<Mutex<Vec<Result<String>>>>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockOcrClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(text.to_string()));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen_files(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Default for MockOcrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrService for MockOcrClient {
    async fn extract_text(&self, document: &Document) -> Result<String> {
        self.seen.lock().unwrap().push(document.file_name());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("Text from {}", document.file_name()))
        } else {
            responses.remove(0)
        }
    }
}
