//! Workspace file matching interface

use std::io;
use std::path::{Path, PathBuf};

/// Trait for resolving a file pattern inside a workspace
pub trait FileMatcher: Send + Sync {
    /// Return the files under `base` matching `pattern`.
    ///
    /// Returned paths may be absolute or relative to `base`.
    fn matches(&self, pattern: &str, base: &Path) -> io::Result<Vec<PathBuf>>;
}
