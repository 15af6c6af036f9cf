//! Binary vs. text heuristic.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected.
pub const SNIFF_LEN: u64 = 1024;

/// Returns `true` if the file looks binary.
///
/// A NUL byte in the first [`SNIFF_LEN`] bytes, or a prefix that does not
/// decode as UTF-8, marks the file binary. This includes a multi-byte
/// character cut off by the prefix boundary. Unreadable files are reported
/// binary so they are left alone.
pub fn is_binary(path: &Path) -> bool {
    match read_prefix(path) {
        Ok(prefix) => is_binary_prefix(&prefix),
        Err(e) => {
            log::debug!("Treating unreadable file as binary: {} ({})", path.display(), e);
            true
        }
    }
}

fn read_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut prefix)?;
    Ok(prefix)
}

fn is_binary_prefix(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return true;
    }

    std::str::from_utf8(prefix).is_err()
}
