//! Flat record scanning over JSON-shaped profile documents.
//!
//! The input resembles a JSON array of flat objects but is pattern-matched,
//! not parsed: object blocks are split on brace pairs with no nesting
//! support, and field pairs are matched with a single regex. Nested braces
//! mis-partition the document; that is a structural limit of the matcher,
//! not a bug to generalize away.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// One object block: a brace pair with no inner braces. The first `}`
    /// after a `{` always ends the block.
    static ref BLOCK: Regex = Regex::new(r"\{[^{}]+\}").unwrap();
    /// One `"key": value` pair; the value is a bracketed list, a quoted
    /// string, or a bare word.
    static ref FIELD: Regex =
        Regex::new(r#""([^"]+)"\s*:\s*(\[[^\]]*\]|"[^"]*"|\w+)"#).unwrap();
}

const KEY_TITLE: &str = "cargo";
const KEY_LEVEL: &str = "nivel_recomendado";
const KEY_ROLE: &str = "rol_principal";
const KEY_TOOLS: &str = "herramientas_clave";
const KEY_ESSENTIAL: &str = "es_fundamental";

/// One technical profile derived from a scanned block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    /// Job title (`cargo`).
    pub title: String,
    /// Recommended seniority level (`nivel_recomendado`).
    pub level: String,
    /// Main responsibility description (`rol_principal`).
    pub primary_role: String,
    /// Tools list rendered as text, brackets rewritten to parens
    /// (`herramientas_clave`).
    pub tools: String,
    /// Whether the profile is foundational for the team (`es_fundamental`).
    pub essential: bool,
}

impl ProfileRecord {
    /// Build a record from one block's fields, substituting defaults for
    /// absent keys. Never fails: partial input degrades to default-valued
    /// records.
    ///
    /// The tools value keeps its inner text untouched; only the bracket
    /// characters are rewritten to parens. The essential flag is a
    /// case-sensitive comparison against the literal `true`.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str, default: &str| {
            fields
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        ProfileRecord {
            title: get(KEY_TITLE, "N/A"),
            level: get(KEY_LEVEL, "N/A"),
            primary_role: get(KEY_ROLE, "N/A"),
            tools: get(KEY_TOOLS, "[]").replace('[', "(").replace(']', ")"),
            essential: get(KEY_ESSENTIAL, "false") == "true",
        }
    }
}

/// Iterate every non-nested `{...}` block of `document`, in document order.
pub fn scan_blocks(document: &str) -> impl Iterator<Item = &str> {
    BLOCK.find_iter(document).map(|m| m.as_str())
}

/// Collect the `"key": value` pairs of one block. Quoted values are
/// quote-stripped; a repeated key overwrites the earlier value.
pub fn block_fields(block: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for caps in FIELD.captures_iter(block) {
        let key = caps[1].trim().to_string();
        let mut value = caps[2].trim().to_string();
        if value.starts_with('"') && value.ends_with('"') {
            value = value[1..value.len() - 1].to_string();
        }
        fields.insert(key, value);
    }
    fields
}

/// Scan every block of `document` into profile records, in document order.
pub fn scan_profiles(document: &str) -> Vec<ProfileRecord> {
    scan_blocks(document)
        .map(|block| ProfileRecord::from_fields(&block_fields(block)))
        .collect()
}
