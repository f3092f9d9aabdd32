// Document → record scan → SQLite ingestion, end to end.

#[path = "../common/mod.rs"]
mod common;

use refit_core::record::scan_profiles;
use refit_core::sqlite::{ProfileStore, SqlLog};

#[test]
fn ingests_profile_document() {
    let profiles = scan_profiles(common::PROFILE_DOC);
    assert_eq!(profiles.len(), 3);

    let store = ProfileStore::in_memory().unwrap();
    let mut log = SqlLog::sink();
    store.reset_table(&mut log).unwrap();
    let inserted = store.insert_profiles(&profiles, &mut log).unwrap();
    assert_eq!(inserted, 3);

    let rows = store.all_profiles().unwrap();
    assert_eq!(rows[0].title, "Backend Developer");
    assert_eq!(rows[0].level, "Senior");
    assert_eq!(rows[0].tools, "Java Spring Boot MySQL");
    assert!(rows[0].essential);

    assert_eq!(rows[1].title, "QA Engineer");
    assert!(!rows[1].essential);

    // The partial block degrades to defaults instead of failing the load.
    assert_eq!(rows[2].title, "Intern");
    assert_eq!(rows[2].level, "N/A");
    assert_eq!(rows[2].tools, "");
    assert!(!rows[2].essential);
}

#[test]
fn bracket_values_rewrite_before_sanitizing() {
    let profiles = scan_profiles(common::PROFILE_DOC);
    // In the scanned record the brackets are parens and inner text is
    // untouched; sanitizing happens only at insertion time.
    assert_eq!(profiles[1].tools, "(\"Selenium\", \"JUnit\")");

    let store = ProfileStore::in_memory().unwrap();
    let mut log = SqlLog::sink();
    store.reset_table(&mut log).unwrap();
    store.insert_profiles(&profiles, &mut log).unwrap();
    assert_eq!(store.all_profiles().unwrap()[1].tools, "Selenium JUnit");
}

#[test]
fn reload_replaces_rows() {
    let profiles = scan_profiles(common::PROFILE_DOC);
    let store = ProfileStore::in_memory().unwrap();
    let mut log = SqlLog::sink();

    store.reset_table(&mut log).unwrap();
    store.insert_profiles(&profiles, &mut log).unwrap();
    store.reset_table(&mut log).unwrap();
    store.insert_profiles(&profiles[..1], &mut log).unwrap();

    assert_eq!(store.count_profiles().unwrap(), 1);
}

#[test]
fn nested_document_loads_mispartitioned_records() {
    // A nested object inside a block mis-partitions the scan: only the
    // inner block matches, so the load succeeds with a default-valued row
    // rather than the intended one.
    let doc = r#"[{"cargo": "Architect", "meta": {"source": "import"}}]"#;
    let profiles = scan_profiles(doc);
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].title, "N/A");

    let store = ProfileStore::in_memory().unwrap();
    let mut log = SqlLog::sink();
    store.reset_table(&mut log).unwrap();
    assert_eq!(store.insert_profiles(&profiles, &mut log).unwrap(), 1);
    assert_eq!(store.all_profiles().unwrap()[0].title, "N/A");
}

#[test]
fn sql_log_transcribes_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("sql_output/executed_commands.sql");

    let profiles = scan_profiles(common::PROFILE_DOC);
    let store = ProfileStore::in_memory().unwrap();
    let mut log = SqlLog::file(&log_path).unwrap();
    store.reset_table(&mut log).unwrap();
    store.insert_profiles(&profiles, &mut log).unwrap();
    drop(log);

    let transcript = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(transcript.matches("INSERT INTO perfiles_tecnicos").count(), 3);
    assert!(transcript.contains("'Backend Developer'"));
    assert!(transcript.contains("'Java Spring Boot MySQL'"));
}
