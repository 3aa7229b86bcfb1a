//! Non-recursive file lookup by glob.

use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::error::LoadError;

/// A compiled file-name pattern such as `tanager-statistics-file-*.csv`.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    matcher: GlobMatcher,
}

impl FileMatcher {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidPattern` if the glob does not parse.
    pub fn new(pattern: &str) -> Result<Self, LoadError> {
        Glob::new(pattern)
            .map(|g| Self {
                matcher: g.compile_matcher(),
            })
            .map_err(|e| LoadError::InvalidPattern {
                pattern: pattern.to_string(),
                detail: e.to_string(),
            })
    }

    /// Regular files directly inside `dir` whose name matches, sorted by path.
    ///
    /// A missing directory yields no matches rather than an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `dir` exists but cannot be listed.
    pub fn matches_in(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && self.matcher.is_match(entry.file_name()) {
                found.push(path);
            }
        }
        found.sort();
        Ok(found)
    }
}
