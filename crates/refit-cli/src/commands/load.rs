use std::fs;
use std::path::Path;

use refit_core::config::RefitConfig;
use refit_core::record::scan_profiles;
use refit_core::sqlite::{ProfileStore, SqlLog};

/// Run `refit load <data> [--db <path>]` — scan the profile document and
/// load its records into the profile database, replacing previous rows.
pub fn run(verbose: bool, data_path: &str, db: Option<&str>) -> i32 {
    let document = match fs::read_to_string(data_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit load: cannot read {}: {}", data_path, e);
            return 2;
        }
    };

    let profiles = scan_profiles(&document);
    if verbose {
        eprintln!("refit load: scanned {} profile blocks", profiles.len());
    }

    let config = RefitConfig::load(Path::new(".refit"));
    let db_path = db.unwrap_or(&config.database.path);

    if let Some(parent) = Path::new(db_path).parent() {
        if parent != Path::new("") {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("refit load: cannot create {}: {}", parent.display(), e);
                return 2;
            }
        }
    }

    let mut log = match SqlLog::file(Path::new(&config.database.sql_log)) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("refit load: warning: {}; continuing without SQL log", e);
            SqlLog::sink()
        }
    };

    let store = match ProfileStore::open(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("refit load: cannot open database {}: {}", db_path, e);
            return 2;
        }
    };

    let inserted = match store
        .reset_table(&mut log)
        .and_then(|_| store.insert_profiles(&profiles, &mut log))
    {
        Ok(n) => n,
        Err(e) => {
            eprintln!("refit load: {}", e);
            return 2;
        }
    };

    println!("loaded {inserted} profiles into {db_path}");
    0
}
