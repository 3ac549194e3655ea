//! Boundary between caller-supplied bytes and the text the analyzers consume.

use crate::error::AnalysisError;

/// Decode caller-supplied bytes as UTF-8 text.
///
/// File-format decoding (PDF, DOCX) happens upstream; anything that reaches
/// the analyzers must already be plain text. A leading byte-order mark is
/// dropped.
pub fn decode_text(bytes: &[u8]) -> Result<&str, AnalysisError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        AnalysisError::InvalidInput(format!(
            "expected UTF-8 text, invalid byte at offset {}",
            e.valid_up_to()
        ))
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}
