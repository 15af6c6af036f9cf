mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_rebrand_rewrites_contents() {
    let temp = create_test_repo();
    let root = temp.path();

    run_rebrand(root, &[]).success();

    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# Junita\n\nSee https://project-junita.github.io for docs.\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("Cargo.toml")).unwrap(),
        "[workspace]\nmembers = [\"crates/junita_core\", \"junita-server\"]\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("crates/junita_core/src/lib.rs")).unwrap(),
        "pub const JUNITA_VERSION: &str = \"1\";\npub struct Junita;\n"
    );
}

#[test]
fn test_rebrand_renames_paths_bottom_up() {
    let temp = create_test_repo();
    let root = temp.path();

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("blinc_config.toml → junita_config.toml"))
        .stdout(predicate::str::contains("blinc-server → junita-server"))
        .stdout(predicate::str::contains("Paths renamed: 3"));

    assert!(root.join("junita-server/junita_config.toml").is_file());
    assert!(root.join("crates/junita_core/Cargo.toml").is_file());
    assert!(!root.join("blinc-server").exists());
    assert!(!root.join("crates/blinc_core").exists());
}

#[test]
fn test_rebrand_reports_file_before_its_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("blinc-server")).unwrap();
    fs::write(root.join("blinc-server/blinc_config.toml"), "").unwrap();

    let output = run_rebrand(root, &[]).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let file_pos = stdout.find("blinc_config.toml → junita_config.toml").unwrap();
    let dir_pos = stdout.find("blinc-server → junita-server").unwrap();
    assert!(file_pos < dir_pos, "file rename must be listed first:\n{}", stdout);
}

#[test]
fn test_rebrand_leaves_skipped_content_alone() {
    let temp = create_test_repo();
    let root = temp.path();

    run_rebrand(root, &[]).success();

    assert_eq!(fs::read_to_string(root.join(".git/refs/blinc")).unwrap(), "blinc");
    assert_eq!(
        fs::read_to_string(root.join("Cargo.lock")).unwrap(),
        "name = \"blinc_core\"\n"
    );
}

#[test]
fn test_skip_dir_pruning_is_transitive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let deep = root.join("node_modules/a/b/c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("blinc.js"), "Blinc").unwrap();

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("Total files scanned: 0"))
        .stdout(predicate::str::contains("Paths renamed: 0"));

    assert_eq!(fs::read_to_string(deep.join("blinc.js")).unwrap(), "Blinc");
}

#[test]
fn test_nul_byte_file_never_rewritten() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("notes.txt"), b"Blinc\0Blinc").unwrap();

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("Total files scanned: 0"));

    assert_eq!(fs::read(root.join("notes.txt")).unwrap(), b"Blinc\0Blinc");
}

#[test]
fn test_url_sentence_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join("doc.txt"),
        "Visit https://github.com/project-blinc/blinc-core for the blinc_lib package.",
    )
    .unwrap();

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("Total replacements: 3"));

    assert_eq!(
        fs::read_to_string(root.join("doc.txt")).unwrap(),
        "Visit https://github.com/project-junita/junita-core for the junita_lib package."
    );
}

#[test]
fn test_extra_exclude_and_skip_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("vendor")).unwrap();
    fs::write(root.join("vendor/blinc.rs"), "Blinc").unwrap();
    fs::write(root.join("keep.generated.rs"), "Blinc").unwrap();
    fs::write(root.join("change.rs"), "Blinc").unwrap();

    run_rebrand(root, &["--skip-dir", "vendor", "--exclude", "*.generated.rs"]).success();

    assert_eq!(fs::read_to_string(root.join("vendor/blinc.rs")).unwrap(), "Blinc");
    assert_eq!(fs::read_to_string(root.join("keep.generated.rs")).unwrap(), "Blinc");
    assert_eq!(fs::read_to_string(root.join("change.rs")).unwrap(), "Junita");
}

#[test]
fn test_rename_collision_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("blinc.md"), "old").unwrap();
    fs::write(root.join("junita.md"), "new").unwrap();

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("Rename failures: 1"));

    assert_eq!(fs::read_to_string(root.join("junita.md")).unwrap(), "new");
    assert!(root.join("blinc.md").exists());
}

#[test]
fn test_dry_run_reports_sibling_collision_like_live_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("blinc-junita.md"), "").unwrap();
    fs::write(root.join("junita-blinc.md"), "").unwrap();

    run_rebrand(root, &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("Paths renamed: 1"))
        .stdout(predicate::str::contains("Rename failures: 1"));

    run_rebrand(root, &[])
        .success()
        .stdout(predicate::str::contains("Paths renamed: 1"))
        .stdout(predicate::str::contains("Rename failures: 1"));
}
