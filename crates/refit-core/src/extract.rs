//! Scanning extraction of one string field from a JSON-ish document.
//!
//! Finds the field by its literal `"name": "` marker and scans for the
//! closing quote — no general JSON parser. Sufficient for the flat response
//! shapes the Gemini endpoint actually produces.

use thiserror::Error;

/// Errors from [`extract_field`]. Both are recoverable at the call site.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The `"<field>": "` marker is absent. Callers should surface the whole
    /// document as the diagnostic payload.
    #[error("field \"{0}\" not found in document")]
    FieldNotFound(String),

    /// The opening quote was found but no unescaped closing quote exists
    /// before the end of the document.
    #[error("no closing quote found for field \"{0}\"")]
    UnterminatedLiteral(String),
}

/// Extract the raw (still escaped) literal body of `field` from `document`.
///
/// Matches the exact marker `"<field>": "` — one space after the colon, no
/// other whitespace tolerance. The body ends at the first `"` whose
/// immediately preceding character is not a backslash.
///
/// Known boundary behavior: the single-character lookback cannot tell an
/// escaped quote from an escaped backslash followed by a real closing quote,
/// so a body ending in `\\` makes the scan run past its closing quote. This
/// is locked in by tests, not corrected.
pub fn extract_field<'a>(document: &'a str, field: &str) -> Result<&'a str, ExtractError> {
    let marker = format!("\"{field}\": \"");
    let start = document
        .find(&marker)
        .ok_or_else(|| ExtractError::FieldNotFound(field.to_string()))?
        + marker.len();

    let bytes = document.as_bytes();
    let mut end = start;
    while end < bytes.len() {
        if bytes[end] == b'"' && bytes[end - 1] != b'\\' {
            break;
        }
        end += 1;
    }
    if end >= bytes.len() {
        return Err(ExtractError::UnterminatedLiteral(field.to_string()));
    }
    Ok(&document[start..end])
}

/// Extract `field` and decode its escape sequences in one step.
pub fn extract_and_unescape(document: &str, field: &str) -> Result<String, ExtractError> {
    extract_field(document, field).map(crate::escape::unescape_literal)
}
