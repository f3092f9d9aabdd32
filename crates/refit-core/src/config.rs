//! Configuration file loading for refit.
//!
//! Reads `.refit/refit.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or
//! incomplete. The Gemini API key is deliberately not configuration — it is
//! read from the `GEMINI_API_KEY` environment variable at call time.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level refit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefitConfig {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub compact: CompactConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Gemini endpoint tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Project compaction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompactConfig {
    /// Extensions (without dots) included in the compacted document.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Profile database locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Destination of the rendered SQL statement log.
    #[serde(default = "default_sql_log")]
    pub sql_log: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_timeout_seconds() -> u64 {
    60
}
fn default_extensions() -> Vec<String> {
    ["java", "xml", "md", "json", "php", "py", "txt", "csv", "rs", "toml"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_db_path() -> String {
    ".refit/profiles.db".to_string()
}
fn default_sql_log() -> String {
    "sql_output/executed_commands.sql".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            sql_log: default_sql_log(),
        }
    }
}

impl Default for RefitConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            api: ApiConfig::default(),
            compact: CompactConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl RefitConfig {
    /// Load configuration from `refit.json` inside the given refit directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(refit_dir: &Path) -> Self {
        let config_path = refit_dir.join("refit.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "refit: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
