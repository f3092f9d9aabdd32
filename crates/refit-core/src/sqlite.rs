//! SQLite-backed storage for scanned profile records.
//!
//! Besides executing statements, the store renders every DDL/DML statement
//! it runs into a plain `.sql` transcript — the [`SqlLog`]. The log
//! destination is passed in explicitly by the caller; there is no
//! process-global log state.

use std::io::Write;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use rusqlite::{params, Connection};

use crate::record::ProfileRecord;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9\s]").unwrap();
    static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Errors from profile storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("SQL log error: {0}")]
    Log(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// Destination for the rendered SQL statement transcript.
///
/// Passed into every store method that executes statements; use
/// [`SqlLog::sink`] to discard the transcript. Write failures are reported
/// to stderr and do not abort the database operation.
pub struct SqlLog {
    writer: Option<Box<dyn Write + Send>>,
}

impl SqlLog {
    /// Log to a file, creating parent directories as needed. Truncates any
    /// previous transcript and writes a header line.
    pub fn file(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Log(format!("cannot create {}: {e}", parent.display())))?;
        }
        let mut file = std::fs::File::create(path)
            .map_err(|e| StoreError::Log(format!("cannot create {}: {e}", path.display())))?;
        file.write_all(b"-- SQL statement log --\n\n")
            .map_err(|e| StoreError::Log(format!("cannot write {}: {e}", path.display())))?;
        Ok(Self {
            writer: Some(Box::new(file)),
        })
    }

    /// Log to any writer.
    pub fn writer(w: Box<dyn Write + Send>) -> Self {
        Self { writer: Some(w) }
    }

    /// Discard the transcript.
    pub fn sink() -> Self {
        Self { writer: None }
    }

    fn record(&mut self, sql: &str) {
        if let Some(w) = self.writer.as_mut() {
            if let Err(e) = writeln!(w, "{sql}\n") {
                eprintln!("refit: warning: failed to write SQL log entry: {e}");
            }
        }
    }
}

/// Strip punctuation from the rendered tools list before insertion: every
/// character outside `[a-zA-Z0-9\s]` becomes a space, whitespace runs
/// collapse to one space, and the result is trimmed. `("Git","Docker")`
/// stores as `Git Docker`.
pub fn sanitize_tools(tools: &str) -> String {
    let spaced = NON_ALNUM.replace_all(tools, " ");
    WS_RUN.replace_all(&spaced, " ").trim().to_string()
}

fn sql_quote(value: &str) -> String {
    value.replace('\'', "''")
}

/// SQLite-backed store for the `perfiles_tecnicos` table.
pub struct ProfileStore {
    conn: Connection,
}

impl ProfileStore {
    /// Open or create a profile database at the given path.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(ProfileStore { conn })
    }

    /// Create an in-memory profile database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(ProfileStore { conn })
    }

    /// Drop and recreate the profiles table. A load always starts from a
    /// clean table, so re-running a load replaces the previous rows.
    pub fn reset_table(&self, log: &mut SqlLog) -> Result<(), StoreError> {
        let drop_sql = "DROP TABLE IF EXISTS perfiles_tecnicos;";
        log.record(drop_sql);
        self.conn.execute_batch(drop_sql)?;

        let create_sql = "CREATE TABLE perfiles_tecnicos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cargo TEXT NOT NULL,
    nivel_recomendado TEXT,
    rol_principal TEXT,
    herramientas_clave TEXT,
    es_fundamental INTEGER NOT NULL DEFAULT 0
);";
        log.record(create_sql);
        self.conn.execute_batch(create_sql)?;
        Ok(())
    }

    /// Insert records in one transaction, sanitizing the tools value.
    /// Returns the number of rows inserted.
    pub fn insert_profiles(
        &self,
        profiles: &[ProfileRecord],
        log: &mut SqlLog,
    ) -> Result<usize, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO perfiles_tecnicos \
                 (cargo, nivel_recomendado, rol_principal, herramientas_clave, es_fundamental) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for p in profiles {
                let tools = sanitize_tools(&p.tools);
                log.record(&format!(
                    "INSERT INTO perfiles_tecnicos (cargo, nivel_recomendado, rol_principal, \
                     herramientas_clave, es_fundamental) VALUES ('{}', '{}', '{}', '{}', {});",
                    sql_quote(&p.title),
                    sql_quote(&p.level),
                    sql_quote(&p.primary_role),
                    sql_quote(&tools),
                    if p.essential { "TRUE" } else { "FALSE" },
                ));
                stmt.execute(params![
                    p.title,
                    p.level,
                    p.primary_role,
                    tools,
                    p.essential as i32,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        Ok(count)
    }

    /// Number of rows currently in the profiles table.
    pub fn count_profiles(&self) -> Result<u64, StoreError> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM perfiles_tecnicos", [], |row| {
                    row.get(0)
                })?;
        Ok(count)
    }

    /// Read every stored profile back, in insertion order.
    pub fn all_profiles(&self) -> Result<Vec<ProfileRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT cargo, nivel_recomendado, rol_principal, herramientas_clave, es_fundamental \
             FROM perfiles_tecnicos ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ProfileRecord {
                title: row.get(0)?,
                level: row.get(1)?,
                primary_role: row.get(2)?,
                tools: row.get(3)?,
                essential: row.get::<_, i32>(4)? != 0,
            })
        })?;
        let mut profiles = Vec::new();
        for row in rows {
            profiles.push(row?);
        }
        Ok(profiles)
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
