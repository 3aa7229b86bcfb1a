//! Data file locations and naming patterns.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_statistics_pattern() -> String {
    "tanager-statistics-file-*.csv".to_string()
}

fn default_distribution_pattern() -> String {
    "tanager-population-file-*.tsv".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Root directory holding one subdirectory per project.
    #[serde(default)]
    pub root: PathBuf,

    /// Glob matched against file names directly inside a project directory.
    #[serde(default = "default_statistics_pattern")]
    pub statistics_pattern: String,

    /// Glob for the per-generation population table inside a project directory.
    #[serde(default = "default_distribution_pattern")]
    pub distribution_pattern: String,

    /// Fixed population table used for every project instead of the pattern.
    #[serde(default)]
    pub distribution_file: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            statistics_pattern: default_statistics_pattern(),
            distribution_pattern: default_distribution_pattern(),
            distribution_file: None,
        }
    }
}
