//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while discovering projects or loading their data files.
///
/// Everything except `ProjectListing` is rendered in place of the affected
/// chart; none of them abort page construction.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no statistics file matching '{pattern}' found in {}", dir.display())]
    NoStatisticsFile { dir: PathBuf, pattern: String },

    #[error("malformed statistics file {}: {detail}", path.display())]
    MalformedStatisticsFile { path: PathBuf, detail: String },

    #[error("failed to read statistics file {}: {source}", path.display())]
    StatisticsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("distribution data unavailable ({}): {detail}", path.display())]
    DistributionData { path: PathBuf, detail: String },

    #[error("failed to list projects under {}: {source}", root.display())]
    ProjectListing {
        root: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid file pattern '{pattern}': {detail}")]
    InvalidPattern { pattern: String, detail: String },

    #[error("invalid project name '{name}'")]
    InvalidProjectName { name: String },
}
