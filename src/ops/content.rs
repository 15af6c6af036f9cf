use crate::rules::rewrite;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of rebranding one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    /// File was (or in dry-run mode, would be) rewritten.
    pub processed: bool,
    pub changes: usize,
    pub error: Option<String>,
}

impl FileResult {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            processed: false,
            changes: 0,
            error: None,
        }
    }
}

/// Rewrites the content of a single file.
///
/// Never fails: read and write errors are recorded on the returned result.
pub fn rebrand_file(path: &Path, dry_run: bool) -> FileResult {
    let mut result = FileResult::new(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            result.error = Some(e.to_string());
            return result;
        }
    };

    let original = decode_ignoring_invalid(&bytes);
    if original.len() != bytes.len() {
        log::debug!("Dropped invalid UTF-8 from {}", path.display());
    }

    let rewritten = rewrite(&original);
    result.changes = rewritten.replacements;

    if rewritten.replacements == 0 {
        return result;
    }

    if dry_run {
        log::info!("Would update: {} ({} changes)", path.display(), result.changes);
        result.processed = true;
        return result;
    }

    match fs::write(path, rewritten.content) {
        Ok(()) => {
            log::debug!("Updated: {} ({} changes)", path.display(), result.changes);
            result.processed = true;
        }
        Err(e) => {
            log::warn!("Failed to write {}: {}", path.display(), e);
            result.error = Some(e.to_string());
        }
    }

    result
}

fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
