use std::path::Path;

use refit_core::compact::compact_project;
use refit_core::config::RefitConfig;

/// Run `refit compact <project> <output>` — flatten the project tree into
/// one annotated context document.
pub fn run(verbose: bool, project: &str, output: &str) -> i32 {
    let root = Path::new(project);
    if !root.is_dir() {
        eprintln!("refit compact: {} is not a directory", root.display());
        return 2;
    }

    let config = RefitConfig::load(Path::new(".refit"));
    if verbose {
        eprintln!(
            "refit compact: walking {} for extensions {:?}",
            root.display(),
            config.compact.extensions
        );
    }

    let document = compact_project(root, &config.compact.extensions);

    if let Err(e) = std::fs::write(output, &document) {
        eprintln!("refit compact: failed to write {}: {}", output, e);
        return 2;
    }

    println!("project compacted into {output}");
    0
}
