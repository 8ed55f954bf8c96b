use super::types::GenerateContentResponse;
use crate::{Error, Result};

const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Pulls the extracted text out of a `generateContent` response.
///
/// Only the first candidate is considered. When it carries no parts, the
/// finish reason decides between a safety block and a generic empty
/// response. A first part without a `text` field yields an empty string.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .ok_or(Error::NoCandidates)?;

    let first_part = candidate
        .content
        .as_ref()
        .and_then(|c| c.parts.as_ref())
        .and_then(|parts| parts.first());

    match first_part {
        Some(part) => Ok(part.text.clone().unwrap_or_default()),
        None if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) => {
            tracing::warn!("Gemini blocked the request for safety reasons");
            Err(Error::SafetyBlocked)
        }
        None => Err(Error::NoContent),
    }
}
