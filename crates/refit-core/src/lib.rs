//! Scan codecs, profile records, configuration, and storage for refit.
//!
//! This crate provides the foundational pieces used across all refit crates:
//! - [`escape`] — JSON string-literal escape/unescape codec
//! - [`extract`] — scanning extraction of one string field from a document
//! - [`record`] — flat profile record scanning into [`record::ProfileRecord`]
//! - [`compact`] — project-tree compaction into a single context document
//! - [`config`] — configuration loading from `.refit/refit.json`
//! - [`sqlite`] — SQLite-backed profile storage and the SQL statement log

pub mod compact;
pub mod config;
pub mod escape;
pub mod extract;
pub mod record;
pub mod sqlite;
