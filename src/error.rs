//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found at '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: '{0}'. Expected an image or PDF file")]
    UnsupportedFileType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed. Status Code: {status}. Reason: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Failed to parse API response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    #[error("The API response did not contain any candidates.")]
    NoCandidates,

    #[error("The API response did not contain any content.")]
    NoContent,

    #[error("The request was blocked due to safety concerns.")]
    SafetyBlocked,

    #[error(
        "API key not configured. Set the GEMINI_API_KEY environment variable or edit '{}'",
        .0.display()
    )]
    MissingApiKey(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
