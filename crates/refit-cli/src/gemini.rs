//! Gemini `generateContent` client.
//!
//! The request payload is assembled by string formatting with the escape
//! codec; the reply text is pulled back out of the response body with the
//! scanning field extractor. No general JSON (de)serialization happens on
//! either side of the wire.

use std::io::Read;

use refit_core::escape::escape_text;
use refit_core::extract::{self, ExtractError};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// System instruction asking for bare corrected code, so the reply is
/// directly writable as a source file.
const SYSTEM_INSTRUCTION: &str = "Act as an experienced software engineer. Analyze the \
full project context and the provided file to find and apply the necessary corrections. \
Your reply MUST be ONLY the complete corrected code, with no explanations and no markup \
blocks.";

pub(crate) struct GeminiClient {
    model: String,
    timeout_seconds: u64,
    api_key: String,
}

impl GeminiClient {
    /// Build a client for the configured model, taking the API key from the
    /// `GEMINI_API_KEY` environment variable. Fails before any network
    /// activity when the key is missing or empty.
    pub fn from_env(model: &str, timeout_seconds: u64) -> Result<Self, String> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            return Err(format!("{ENV_API_KEY} environment variable is not set"));
        }
        Ok(Self {
            model: model.to_string(),
            timeout_seconds,
            api_key,
        })
    }

    /// Send the project context plus a work item (a file to fix, or a task
    /// prompt taking the file slot) and return the decoded reply text.
    pub fn analyze(&self, context: &str, work_item: &str) -> Result<String, String> {
        let user_query = format!("Project context:\n{context}\n\nFile to fix:\n{work_item}");
        self.generate(SYSTEM_INSTRUCTION, &user_query)
    }

    /// Send one generateContent request and decode the reply.
    fn generate(&self, system_instruction: &str, user_query: &str) -> Result<String, String> {
        let payload = build_payload(system_instruction, user_query);
        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(std::time::Duration::from_secs(self.timeout_seconds)))
                .http_status_as_error(false)
                .build(),
        );

        let response = agent
            .post(&url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .send(payload.as_bytes())
            .map_err(|e| format!("Gemini API call failed: {e}"))?;

        let status = response.status();
        let mut body = String::new();
        response
            .into_body()
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| format!("failed to read Gemini response: {e}"))?;

        if !status.is_success() {
            return Err(format!("Gemini API returned {status}: {body}"));
        }

        match extract::extract_and_unescape(&body, "text") {
            Ok(text) => Ok(text),
            // Surface the whole document when the field is missing — the
            // body is the only diagnostic there is.
            Err(ExtractError::FieldNotFound(_)) => Err(format!(
                "no \"text\" field in Gemini response; raw response: {body}"
            )),
            Err(e @ ExtractError::UnterminatedLiteral(_)) => {
                Err(format!("malformed Gemini response: {e}"))
            }
        }
    }
}

/// Render the generateContent request body. The embedded texts go through
/// the escape codec; everything else is a fixed template.
fn build_payload(system_instruction: &str, user_query: &str) -> String {
    format!(
        "{{\"systemInstruction\":{{\"parts\":[{{\"text\":\"{}\"}}]}},\
         \"contents\":[{{\"role\":\"user\",\"parts\":[{{\"text\":\"{}\"}}]}}]}}",
        escape_text(system_instruction),
        escape_text(user_query)
    )
}
