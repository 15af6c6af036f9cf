//! Orchestration of a rebrand run: validate, confirm, rewrite, rename, report.

use crate::error::Result;
use crate::filter::PathFilter;
use crate::ops::{FileResult, RenameOutcome, find_files_to_process, rebrand_file, rename_paths};
use crate::report::{print_header, print_summary};
use crate::validation::{confirm_operation, validate_root, validate_skip_dirs};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Files processed between progress updates.
const PROGRESS_EVERY: usize = 10;

/// Arguments for a rebrand run.
#[derive(Parser, Debug, Clone)]
pub struct RebrandArgs {
    /// Root of the repository to rebrand
    pub path: PathBuf,

    /// Show what would change without modifying anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip the interactive confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Additional glob pattern of files to leave untouched (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Additional directory name whose subtree is left untouched (repeatable)
    #[arg(long = "skip-dir", value_name = "NAME")]
    pub skip_dirs: Vec<String>,
}

/// Results of both phases of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebrandReport {
    pub files: Vec<FileResult>,
    pub renames: RenameOutcome,
}

/// Rewrites every eligible file under `root`, then renames branded paths.
///
/// Per-file and per-rename failures are collected in the report.
pub fn rebrand_tree(root: &Path, filter: &PathFilter, dry_run: bool) -> RebrandReport {
    let paths = find_files_to_process(root, filter);
    let total = paths.len();
    println!("Found {} files to process", total);

    println!("\nProcessing files...");
    let mut files = Vec::with_capacity(total);
    for (i, path) in paths.iter().enumerate() {
        if (i + 1) % PROGRESS_EVERY == 0 {
            print!("  Progress: {}/{}\r", i + 1, total);
            let _ = io::stdout().flush();
        }
        files.push(rebrand_file(path, dry_run));
    }
    println!("  Progress: {}/{} - Done!", total, total);

    println!("\nRenaming files and directories...");
    let renames = rename_paths(root, filter, dry_run);

    RebrandReport { files, renames }
}

pub fn execute(args: RebrandArgs) -> Result<()> {
    let root = validate_root(&args.path)?;
    validate_skip_dirs(&args.skip_dirs)?;
    let filter = PathFilter::new(&args.skip_dirs, &args.exclude)?;

    log::debug!("Repository root: {}", root.display());

    print_header(&root, args.dry_run);

    if !confirm_operation(&args)? {
        println!("{}", "Aborted.".yellow());
        return Ok(());
    }

    println!("\nScanning repository...");
    let report = rebrand_tree(&root, &filter, args.dry_run);

    print_summary(&report.files, &report.renames, &root, args.dry_run);

    Ok(())
}
