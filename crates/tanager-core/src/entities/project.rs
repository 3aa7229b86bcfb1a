use std::path::PathBuf;

use serde::Serialize;

/// One experiment's output directory under the data root.
///
/// Projects are rediscovered on every enumeration; nothing is cached.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Whether the directory still exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}
