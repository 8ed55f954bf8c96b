use crate::mime::DocumentKind;

pub const EXTRACT_IMAGE: &str = "Extract all text from this image.";
pub const EXTRACT_PDF: &str = "Extract all text from this PDF document.";

/// Instruction sent with a document of the given kind.
pub fn extraction_instruction(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Image => EXTRACT_IMAGE,
        DocumentKind::Pdf => EXTRACT_PDF,
    }
}
