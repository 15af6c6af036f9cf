//! Run summary: aggregation of file results and renames, and its printout.

use crate::ops::{FileResult, RenameOutcome};
use colored::Colorize;
use std::path::Path;

/// Errors listed before collapsing into "... and N more".
pub const MAX_ERRORS_SHOWN: usize = 5;
/// Files listed in the "top changes" section.
pub const MAX_TOP_FILES: usize = 10;
/// Renames listed before collapsing into "... and N more".
pub const MAX_RENAMES_SHOWN: usize = 10;

/// Aggregated counts for one rebrand run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub total_replacements: usize,
    pub paths_renamed: usize,
    pub errors: Vec<&'a FileResult>,
    /// Files with at least one change, most changes first.
    pub top_files: Vec<&'a FileResult>,
}

impl<'a> Summary<'a> {
    pub fn new(results: &'a [FileResult], renames: &RenameOutcome) -> Self {
        let errors = results.iter().filter(|r| r.error.is_some()).collect();

        let mut top_files: Vec<_> = results.iter().filter(|r| r.changes > 0).collect();
        // Stable sort keeps walk order among ties.
        top_files.sort_by(|a, b| b.changes.cmp(&a.changes));
        top_files.truncate(MAX_TOP_FILES);

        Self {
            files_scanned: results.len(),
            files_modified: results.iter().filter(|r| r.processed).count(),
            total_replacements: results.iter().map(|r| r.changes).sum(),
            paths_renamed: renames.renames.len(),
            errors,
            top_files,
        }
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn rule() -> String {
    "=".repeat(60)
}

/// Prints the banner shown before scanning.
pub fn print_header(root: &Path, dry_run: bool) {
    println!("{}", rule());
    println!("{}", "JUNITA REBRANDING".bold().cyan());
    println!("{}", rule());
    println!("{} {}", "Repository:".bold(), root.display());
    if dry_run {
        println!("{} {}", "Mode:".bold(), "DRY RUN (no changes will be made)".yellow());
    } else {
        println!("{} {}", "Mode:".bold(), "LIVE (files will be modified)".red());
    }
    println!("{}", rule());
}

/// Prints the end-of-run summary.
pub fn print_summary(results: &[FileResult], renames: &RenameOutcome, root: &Path, dry_run: bool) {
    let summary = Summary::new(results, renames);

    println!("\n{}", rule());
    println!("{}", "REBRANDING SUMMARY".bold().cyan());
    println!("{}", rule());
    println!("Total files scanned: {}", summary.files_scanned);
    println!("Files modified: {}", summary.files_modified);
    println!("Total replacements: {}", summary.total_replacements);
    println!("Paths renamed: {}", summary.paths_renamed);

    if !summary.errors.is_empty() {
        println!("\n{} {}", "Errors encountered:".red().bold(), summary.errors.len());
        for r in summary.errors.iter().take(MAX_ERRORS_SHOWN) {
            println!(
                "  - {}: {}",
                display_path(&r.path, root),
                r.error.as_deref().unwrap_or_default()
            );
        }
        if summary.errors.len() > MAX_ERRORS_SHOWN {
            println!("  ... and {} more", summary.errors.len() - MAX_ERRORS_SHOWN);
        }
    }

    if !summary.top_files.is_empty() {
        println!("\n{}", "Top files by number of changes:".bold());
        for r in &summary.top_files {
            println!("  {:4} changes - {}", r.changes, display_path(&r.path, root).dimmed());
        }
    }

    if !renames.renames.is_empty() {
        println!("\n{}", "Renamed paths:".bold());
        for record in renames.renames.iter().take(MAX_RENAMES_SHOWN) {
            println!(
                "  {} → {}",
                display_name(&record.from).yellow(),
                display_name(&record.to).green()
            );
        }
        if renames.renames.len() > MAX_RENAMES_SHOWN {
            println!("  ... and {} more", renames.renames.len() - MAX_RENAMES_SHOWN);
        }
    }

    if !renames.failures.is_empty() {
        println!("\n{} {}", "Rename failures:".red().bold(), renames.failures.len());
        for failure in &renames.failures {
            println!(
                "  - {} → {}: {}",
                display_path(&failure.from, root),
                display_name(&failure.to),
                failure.error
            );
        }
    }

    println!("{}", rule());

    if dry_run {
        println!(
            "\n{}",
            "⚠️  This was a DRY RUN. No files were modified.".yellow().bold()
        );
        println!("Run without --dry-run to apply changes.");
    } else {
        println!("\n{}", "✅ Rebranding complete!".green().bold());
        println!("\nNext steps:");
        println!("1. Review the changes: git diff");
        println!("2. Test that everything still builds/runs");
        println!("3. Update your logo files");
        println!("4. Commit: git add -A && git commit -m 'Rebrand to Junita'");
    }
}
