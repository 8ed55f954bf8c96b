//! Text extraction for images and PDFs via Google Gemini
//!
//! Reads a local file, sends it to the Gemini `generateContent` endpoint as
//! base64 inline data with an extraction instruction, and interprets the
//! response into plain text or a typed error.

pub mod ai;
pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod mime;
pub mod prompts;
pub mod sample;

pub use error::{Error, Result};
