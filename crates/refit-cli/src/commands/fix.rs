use std::fs;
use std::path::{Path, PathBuf};

use refit_core::config::RefitConfig;

use crate::gemini::GeminiClient;

/// Run `refit fix <context> <target>` — send the target file with its
/// project context to Gemini and write the corrected copy next to the
/// target with a `-fixed` suffix.
pub fn run(verbose: bool, context_path: &str, target_path: &str) -> i32 {
    let context = match fs::read_to_string(context_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit fix: cannot read context {}: {}", context_path, e);
            return 2;
        }
    };
    let target = match fs::read_to_string(target_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit fix: cannot read target {}: {}", target_path, e);
            return 2;
        }
    };

    let config = RefitConfig::load(Path::new(".refit"));
    let client = match GeminiClient::from_env(&config.api.model, config.api.timeout_seconds) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit fix: {}", e);
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "refit fix: sending {} ({} bytes of context) to {}",
            target_path,
            context.len(),
            config.api.model
        );
    }
    eprintln!("analyzing and fixing {target_path}, this can take a while...");

    let corrected = match client.analyze(&context, &target) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("refit fix: {}", e);
            return 2;
        }
    };

    let output_path = fixed_path(Path::new(target_path));
    if let Err(e) = fs::write(&output_path, corrected) {
        eprintln!("refit fix: failed to write {}: {}", output_path.display(), e);
        return 2;
    }

    println!("corrected file written to {}", output_path.display());
    0
}

/// `src/App.java` becomes `src/App-fixed.java`; an extensionless path just
/// gets the suffix appended.
fn fixed_path(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = match target.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-fixed.{ext}"),
        None => format!("{stem}-fixed"),
    };
    match target.parent() {
        Some(parent) if parent != Path::new("") => parent.join(name),
        _ => PathBuf::from(name),
    }
}
