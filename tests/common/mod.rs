//! Shared fixtures for junita-rebrand integration tests.
//!
//! Tests build small Blinc-branded repositories in temporary directories and
//! drive the real binary against them.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a small Blinc repository with sources, docs and skipped content.
#[allow(unused)]
pub fn create_test_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(
        root.join("Cargo.toml"),
        r#"[workspace]
members = ["crates/blinc_core", "blinc-server"]
"#,
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        "# Blinc\n\nSee https://project-blinc.github.io for docs.\n",
    )
    .unwrap();

    let core = root.join("crates/blinc_core");
    fs::create_dir_all(core.join("src")).unwrap();
    fs::write(
        core.join("Cargo.toml"),
        r#"[package]
name = "blinc_core"
version = "0.1.0"
"#,
    )
    .unwrap();
    fs::write(
        core.join("src/lib.rs"),
        "pub const BLINC_VERSION: &str = \"1\";\npub struct Blinc;\n",
    )
    .unwrap();

    let server = root.join("blinc-server");
    fs::create_dir_all(&server).unwrap();
    fs::write(server.join("blinc_config.toml"), "name = \"blinc-server\"\n").unwrap();

    fs::create_dir_all(root.join(".git/refs")).unwrap();
    fs::write(root.join(".git/refs/blinc"), "blinc").unwrap();
    fs::write(root.join("Cargo.lock"), "name = \"blinc_core\"\n").unwrap();

    temp
}

/// Collects every file under `root` with its bytes, in sorted order.
#[allow(unused)]
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Runs the rebrand binary against `root` with confirmation skipped.
pub fn run_rebrand(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("junita-rebrand");
    cmd.arg(root).arg("--yes").args(extra_args);

    cmd.assert()
}
