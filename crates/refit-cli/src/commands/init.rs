use std::fs;

use refit_core::config::RefitConfig;

/// Run `refit init` — create the `.refit/` directory, a default config, and
/// a default `.refitignore`.
pub fn run(verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("refit init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let refit_dir = cwd.join(".refit");
    if refit_dir.exists() {
        eprintln!("refit init: .refit/ directory already exists");
        return 2;
    }

    if let Err(e) = fs::create_dir_all(&refit_dir) {
        eprintln!("refit init: failed to create .refit/: {}", e);
        return 2;
    }

    let config = RefitConfig::default();
    let config_path = refit_dir.join("refit.json");
    match fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("refit init: failed to write config: {}", e);
            return 2;
        }
    }

    create_refitignore(&cwd, verbose);

    if verbose {
        eprintln!("refit init: initialized in {}", cwd.display());
    }
    0
}

/// Create a default .refitignore file if one doesn't exist.
fn create_refitignore(root: &std::path::Path, verbose: bool) {
    let ignore_path = root.join(".refitignore");
    if ignore_path.exists() {
        return;
    }

    let default_patterns = "\
node_modules/
__pycache__/
target/
dist/
build/
vendor/
.venv/
sql_output/
";

    match fs::write(&ignore_path, default_patterns) {
        Ok(_) => {
            if verbose {
                eprintln!("refit init: created .refitignore");
            }
        }
        Err(e) => {
            eprintln!("refit init: warning: failed to create .refitignore: {}", e);
        }
    }
}
