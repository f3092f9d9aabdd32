// Project compaction over a real (temporary) directory tree.

use std::fs;

use refit_core::compact::compact_project;
use refit_core::config::RefitConfig;

fn default_extensions() -> Vec<String> {
    RefitConfig::default().compact.extensions
}

#[test]
fn compacts_tree_with_headers_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/main/java")).unwrap();
    fs::write(dir.path().join("pom.xml"), "<project/>\n").unwrap();
    fs::write(
        dir.path().join("src/main/java/App.java"),
        "class App {}\n",
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "# demo\n").unwrap();
    fs::write(dir.path().join("logo.png"), [0u8; 4]).unwrap();

    let out = compact_project(dir.path(), &default_extensions());

    assert!(out.contains("// ===== File: README.md =====\n# demo"));
    assert!(out.contains("// ===== File: pom.xml =====\n<project/>"));
    assert!(out.contains("class App {}"));
    assert!(!out.contains("logo.png"));

    // Case-insensitive path order: pom.xml, then README.md, then src/.
    let readme = out.find("README.md").unwrap();
    let pom = out.find("pom.xml").unwrap();
    let app = out.find("App.java").unwrap();
    assert!(pom < readme && readme < app);
}

#[test]
fn refitignore_prunes_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::create_dir_all(dir.path().join("generated")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "guide\n").unwrap();
    fs::write(dir.path().join("generated/out.md"), "noise\n").unwrap();
    fs::write(dir.path().join(".refitignore"), "generated/\n").unwrap();

    let out = compact_project(dir.path(), &default_extensions());
    assert!(out.contains("docs/guide.md"));
    assert!(!out.contains("generated/out.md"));
}

#[test]
fn empty_tree_compacts_to_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(compact_project(dir.path(), &default_extensions()), "");
}
