use super::types::{Content, GenerateContentRequest, InlineData, Part};
use crate::mime::DocumentKind;
use crate::prompts;
use base64::Engine as _;

/// Builds a single-content request: the instruction followed by the file
/// bytes as base64 inline data.
pub fn build_request(bytes: &[u8], mime_type: &str, instruction: &str) -> GenerateContentRequest {
    let data = base64::engine::general_purpose::STANDARD.encode(bytes);

    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: instruction.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data,
                    },
                },
            ],
        }],
    }
}

/// Text-extraction request for a document of the given kind.
pub fn extraction_request(
    kind: DocumentKind,
    bytes: &[u8],
    mime_type: &str,
) -> GenerateContentRequest {
    build_request(bytes, mime_type, prompts::extraction_instruction(kind))
}
