//! # tanager-data
//!
//! Filesystem side of the dashboard. Every call re-reads the disk; nothing is
//! cached between requests.
//!
//! - [`projects`]: enumerate project directories under the data root
//! - [`statistics`]: locate and parse a project's statistics CSV into chart series
//! - [`distribution`]: read one generation's population fitness values
//! - [`pattern`]: glob lookup of files directly inside a directory

pub mod distribution;
pub mod error;
pub mod pattern;
pub mod projects;
pub mod statistics;

pub use distribution::load_distribution;
pub use error::LoadError;
pub use projects::{list_projects, project_dir};
pub use statistics::{MultipleFilesWarning, StatisticsLoad, load_statistics};
