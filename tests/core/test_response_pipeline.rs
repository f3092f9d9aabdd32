// End-to-end response handling: a realistic generateContent body goes
// through the field extractor and the escape decoder.

#[path = "../common/mod.rs"]
mod common;

use refit_core::escape::{escape_text, unescape_literal};
use refit_core::extract::{extract_and_unescape, extract_field, ExtractError};

#[test]
fn decodes_reply_from_full_response_body() {
    let reply = "public class App {\n\tSystem.out.println(\"ok\");\n}";
    let body = common::gemini_response(&escape_text(reply));

    let literal = extract_field(&body, "text").unwrap();
    assert!(literal.contains("\\n"));
    assert!(!literal.contains('\n'));

    assert_eq!(extract_and_unescape(&body, "text").as_deref(), Ok(reply));
}

#[test]
fn decodes_angle_bracket_escapes_from_response() {
    // The endpoint escapes angle brackets as \u003c/\u003e even though the
    // encoder never produces them.
    let body = common::gemini_response("List\\u003cString\\u003e items");
    assert_eq!(
        extract_and_unescape(&body, "text").as_deref(),
        Ok("List<String> items")
    );
}

#[test]
fn error_body_reports_field_not_found() {
    let body = r#"{
  "error": {
    "code": 429,
    "message": "Resource has been exhausted",
    "status": "RESOURCE_EXHAUSTED"
  }
}"#;
    assert_eq!(
        extract_and_unescape(body, "text"),
        Err(ExtractError::FieldNotFound("text".to_string()))
    );
}

#[test]
fn truncated_response_reports_unterminated_literal() {
    let full = common::gemini_response(&escape_text("a long reply that gets cut"));
    let cut = &full[..full.find("cut").unwrap()];
    assert_eq!(
        extract_and_unescape(cut, "text"),
        Err(ExtractError::UnterminatedLiteral("text".to_string()))
    );
}

#[test]
fn reply_ending_in_backslash_overruns_the_literal() {
    // Known boundary behavior: an escaped trailing backslash defeats the
    // one-character lookback, so the scan runs into the rest of the
    // response instead of stopping at the real closing quote.
    let body = common::gemini_response(&escape_text("ends with \\"));
    let literal = extract_field(&body, "text").unwrap();
    assert_ne!(literal, "ends with \\\\");
    // The body spills past its own closing quote and swallows response
    // structure up to the next quote (the one opening the "role" key).
    assert!(literal.starts_with("ends with \\\\\""));
    assert!(literal.contains("],"));
    assert!(!literal.contains("role"));
}

#[test]
fn round_trip_through_payload_and_response() {
    // What the encoder embeds in a payload is exactly what a well-formed
    // response hands back; the decoder must invert it.
    let texts = [
        "multi\nline\nreply",
        "tabs\tand \"quotes\"",
        "a windows path C:\\Users\\dev",
    ];
    for text in texts {
        let body = common::gemini_response(&escape_text(text));
        assert_eq!(
            extract_and_unescape(&body, "text").as_deref(),
            Ok(text),
            "input: {text:?}"
        );
    }
}

#[test]
fn unescape_applies_decode_order() {
    // Double-backslash collapse runs last; escapes decoded earlier must
    // not have their backslashes re-collapsed.
    assert_eq!(unescape_literal("a\\\\b"), "a\\b");
    assert_eq!(unescape_literal("\\\\\\n"), "\\\n");
}
