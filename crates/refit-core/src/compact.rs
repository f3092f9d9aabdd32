//! Project compaction: flatten a source tree into one annotated context
//! document.
//!
//! Walks the project with an ignore-aware walker, keeps files on the
//! configured extension whitelist, and concatenates their contents under
//! `// ===== File: <relative path> =====` headers. The output feeds the
//! Gemini context slot, so ordering is deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Ignore-aware walker over a project tree.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FileWalker {
    pub fn new(root: &Path, extensions: &[String]) -> Self {
        Self {
            root: root.to_path_buf(),
            extensions: extensions.to_vec(),
        }
    }

    /// Collect every regular file whose extension is on the whitelist,
    /// sorted case-insensitively by path for deterministic output.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".refitignore")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            if self.extensions.iter().any(|allowed| *allowed == ext) {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| {
            a.to_string_lossy()
                .to_lowercase()
                .cmp(&b.to_string_lossy().to_lowercase())
        });
        paths
    }
}

/// Compact `root` into a single document.
///
/// Each readable file contributes a `// ===== File: ... =====` header plus
/// its content; sections are joined with newlines. An unreadable file
/// contributes an empty section and a stderr warning rather than failing
/// the whole compaction.
pub fn compact_project(root: &Path, extensions: &[String]) -> String {
    let sections: Vec<String> = FileWalker::new(root, extensions)
        .walk()
        .into_iter()
        .map(|path| {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            match fs::read_to_string(&path) {
                Ok(content) => format!(
                    "\n// ===== File: {} =====\n{}",
                    relative.display(),
                    content
                ),
                Err(e) => {
                    eprintln!("refit compact: cannot read {}: {}", path.display(), e);
                    String::new()
                }
            }
        })
        .collect();

    sections.join("\n")
}
