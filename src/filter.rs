//! Skip rules deciding which paths are never touched.

use crate::error::{RebrandError, Result};
use glob::Pattern;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Directory names whose whole subtree is excluded.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "target",
    "node_modules",
    "dist",
    "build",
    ".cache",
];

/// Glob patterns excluding individual files.
pub const DEFAULT_SKIP_PATTERNS: &[&str] = &[
    // images
    "*.png", "*.jpg", "*.jpeg", "*.gif", "*.ico", "*.svg",
    // fonts
    "*.woff", "*.woff2", "*.ttf", "*.eot",
    // media
    "*.mp4", "*.webm", "*.ogg",
    // archives
    "*.zip", "*.tar", "*.gz", "*.bz2",
    // binaries
    "*.exe", "*.dll", "*.so", "*.dylib",
    // lock files
    "*.lock",
];

/// Skip-directory names plus file glob patterns.
#[derive(Debug, Clone)]
pub struct PathFilter {
    skip_dirs: BTreeSet<String>,
    skip_patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Builds a filter from the built-in rule set plus user additions.
    pub fn new<S: AsRef<str>>(extra_dirs: &[S], extra_patterns: &[S]) -> Result<Self> {
        let skip_dirs = DEFAULT_SKIP_DIRS
            .iter()
            .map(|d| d.to_string())
            .chain(extra_dirs.iter().map(|d| d.as_ref().to_string()))
            .collect();

        let skip_patterns = DEFAULT_SKIP_PATTERNS
            .iter()
            .copied()
            .chain(extra_patterns.iter().map(|p| p.as_ref()))
            .map(|p| Pattern::new(p).map_err(|e| RebrandError::InvalidPattern(p.to_string(), e)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            skip_dirs,
            skip_patterns,
        })
    }

    /// Returns `true` if a directory with this name prunes its subtree.
    pub fn is_skip_dir(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.skip_dirs.contains(n))
    }

    /// Returns `true` if `relative` (a path below the root) must be skipped.
    ///
    /// Any component naming a skip directory excludes the path, as does a
    /// match against any skip pattern.
    pub fn is_skipped(&self, relative: &Path) -> bool {
        let in_skip_dir = relative.components().any(|c| match c {
            Component::Normal(name) => self.is_skip_dir(name),
            _ => false,
        });

        in_skip_dir || self.skip_patterns.iter().any(|p| p.matches_path(relative))
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            skip_patterns: DEFAULT_SKIP_PATTERNS
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
        }
    }
}
