use crate::detect::is_binary;
use crate::filter::PathFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Returns `true` unless the entry is a skip directory below `root`.
pub(crate) fn keep_entry(entry: &DirEntry, filter: &PathFilter) -> bool {
    entry.depth() == 0 || !(entry.file_type().is_dir() && filter.is_skip_dir(entry.file_name()))
}

/// Lists the text files under `root` eligible for rewriting, in sorted order.
///
/// Skip directories prune their whole subtree. Skip patterns only drop the
/// matching file. Binary detection runs last so excluded files are never
/// opened.
pub fn find_files_to_process(root: &Path, filter: &PathFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, filter))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if filter.is_skipped(relative) {
            log::debug!("Skipped by filter: {}", relative.display());
            continue;
        }

        if is_binary(path) {
            log::debug!("Skipped binary file: {}", relative.display());
            continue;
        }

        files.push(entry.into_path());
    }

    files
}
