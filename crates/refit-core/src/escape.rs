//! JSON string-literal escaping without pulling in a serializer.
//!
//! The Gemini request payload is assembled by string formatting, so any text
//! embedded in it has to be escaped by hand. The decoder is the inverse,
//! applied to literal bodies pulled out of response documents by [`crate::extract`].

/// Escape `text` for inclusion between the quotes of a JSON string literal.
///
/// Substitutions run in a fixed order: backslash first, so the backslashes
/// inserted by the later steps are not themselves re-escaped. Only the five
/// characters below are rewritten; control characters outside this set pass
/// through unescaped.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Decode a string-literal body back into plain text.
///
/// Substitutions run in the opposite order from [`escape_text`], plus the two
/// Unicode escapes Gemini emits for angle brackets. The double-backslash
/// collapse runs last so backslashes produced by the earlier steps are not
/// collapsed again. Unmatched escape sequences are left as-is; this never
/// fails.
pub fn unescape_literal(body: &str) -> String {
    body.replace("\\n", "\n")
        .replace("\\\"", "\"")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
        .replace("\\u003c", "<")
        .replace("\\u003e", ">")
        .replace("\\\\", "\\")
}
