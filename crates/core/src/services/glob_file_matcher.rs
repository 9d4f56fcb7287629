//! Glob based file matcher
//!
//! Walks the workspace and matches workspace-relative paths against an
//! Ant-style pattern. Backslashes in patterns are read as path separators so
//! Windows-style patterns such as `**\*.Tests.dll` work on every host.
//! Entries the walk cannot read (dangling links, loops, denied directories)
//! are skipped.

use crate::interfaces::FileMatcher;
use globset::GlobBuilder;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File matcher backed by `globset` and `walkdir`
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobFileMatcher;

impl GlobFileMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl FileMatcher for GlobFileMatcher {
    fn matches(&self, pattern: &str, base: &Path) -> io::Result<Vec<PathBuf>> {
        let normalized = pattern.replace('\\', "/");
        let matcher = GlobBuilder::new(&normalized)
            .literal_separator(true)
            .build()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
            .compile_matcher();

        let mut found = Vec::new();
        for entry in WalkDir::new(base).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(base) else {
                continue;
            };
            if matcher.is_match(rel) {
                found.push(rel.to_path_buf());
            }
        }
        found.sort();

        tracing::debug!("Pattern {} matched {} files", pattern, found.len());
        Ok(found)
    }
}
