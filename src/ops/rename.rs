use crate::filter::PathFilter;
use crate::ops::walk::keep_entry;
use crate::rules::rebrand_name;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A path that was (or in dry-run mode, would be) renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A rename that could not be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFailure {
    pub from: PathBuf,
    pub to: PathBuf,
    pub error: String,
}

/// All renames of one run, in the order they were applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub renames: Vec<RenameRecord>,
    pub failures: Vec<RenameFailure>,
}

/// Renames files and directories under `root` whose names carry the brand.
///
/// Entries are visited bottom-up in sorted order, so every child is handled
/// before its parent directory and no computed path goes stale. The root
/// itself is never renamed and skip directories are left untouched with
/// their whole subtree. A failed rename is recorded and the walk continues.
///
/// A destination taken by an earlier rename of the same run counts as
/// existing, so dry runs report the same collisions as live runs.
pub fn rename_paths(root: &Path, filter: &PathFilter, dry_run: bool) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    let plan: Vec<(PathBuf, PathBuf)> = bottom_up_entries(root, filter)
        .into_iter()
        .filter_map(|entry| {
            let new_name = rebrand_name(entry.file_name().to_str()?)?;
            let to = entry.path().with_file_name(new_name);
            Some((entry.into_path(), to))
        })
        .collect();

    for (from, to) in plan {
        match rename_entry(&from, &to, &claimed, dry_run) {
            Ok(()) => {
                claimed.insert(to.clone());
                outcome.renames.push(RenameRecord { from, to });
            }
            Err(e) => {
                log::warn!("Failed to rename {} → {}: {}", from.display(), to.display(), e);
                outcome.failures.push(RenameFailure {
                    from,
                    to,
                    error: e.to_string(),
                });
            }
        }
    }

    outcome
}

/// Lists entries below `root` so that every directory follows its contents.
///
/// Walks in sorted pre-order (where skip directories can be pruned) and
/// holds each directory back until the walk leaves its subtree.
fn bottom_up_entries(root: &Path, filter: &PathFilter) -> Vec<DirEntry> {
    let mut ordered = Vec::new();
    let mut open_dirs: Vec<DirEntry> = Vec::new();

    let walk = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, filter));

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        while open_dirs
            .last()
            .is_some_and(|dir| dir.depth() >= entry.depth())
        {
            ordered.extend(open_dirs.pop());
        }

        if entry.file_type().is_dir() {
            open_dirs.push(entry);
        } else {
            ordered.push(entry);
        }
    }

    ordered.extend(open_dirs.into_iter().rev());
    ordered
}

fn rename_entry(
    from: &Path,
    to: &Path,
    claimed: &HashSet<PathBuf>,
    dry_run: bool,
) -> io::Result<()> {
    if claimed.contains(to) || fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", to.display()),
        ));
    }

    if dry_run {
        log::info!("Would rename: {} → {}", from.display(), to.display());
        return Ok(());
    }

    fs::rename(from, to)?;
    log::debug!("Renamed: {} → {}", from.display(), to.display());
    Ok(())
}
