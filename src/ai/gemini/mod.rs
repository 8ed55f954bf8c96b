//! Google Gemini `generateContent` integration.

pub mod client;
pub mod interpret;
pub mod ocr;
pub mod request;
pub mod types;

pub use client::GeminiHttpClient;
pub use ocr::GeminiOcrClient;
