//! Statistics file discovery and parsing.
//!
//! A project directory holds one `tanager-statistics-file-*.csv` written by the
//! optimizer's observer. Each row summarizes one generation; the loader turns
//! the rows into aligned mean / upper / lower series for the fitness chart.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tanager_config::DataConfig;
use tanager_core::entities::{StatisticsRecord, StatisticsSeries};

use crate::error::LoadError;
use crate::pattern::FileMatcher;

/// Header names that must be present, each with its accepted alias.
const REQUIRED_COLUMNS: [(&str, &str); 3] = [
    ("num_generations", "generation"),
    ("average_fit", "average"),
    ("std_fit", "std_dev"),
];

/// Non-fatal: more than one statistics file matched and only one was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleFilesWarning {
    pub chosen: PathBuf,
    pub ignored: Vec<PathBuf>,
}

impl fmt::Display for MultipleFilesWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ignored = self
            .ignored
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "more than one statistics file found; using {} and ignoring {ignored}",
            self.chosen.display()
        )
    }
}

/// A successfully loaded statistics file.
#[derive(Debug, Clone)]
pub struct StatisticsLoad {
    pub path: PathBuf,
    pub series: StatisticsSeries,
    pub warning: Option<MultipleFilesWarning>,
}

/// Locate the project's statistics file and derive its chart series.
///
/// # Errors
///
/// - `NoStatisticsFile` when nothing matches `config.statistics_pattern`
/// - `StatisticsFileRead` when the directory or chosen file cannot be read
/// - `MalformedStatisticsFile` for missing columns or unparsable values
/// - `InvalidPattern` when the configured glob does not compile
pub fn load_statistics(dir: &Path, config: &DataConfig) -> Result<StatisticsLoad, LoadError> {
    let (path, warning) = select_statistics_file(dir, &config.statistics_pattern)?;
    if let Some(warning) = &warning {
        tracing::warn!(dir = %dir.display(), "{warning}");
    }

    tracing::info!(path = %path.display(), "reading statistics file");
    let records = read_statistics_file(&path)?;
    Ok(StatisticsLoad {
        path,
        series: StatisticsSeries::from_records(&records),
        warning,
    })
}

/// Pick the first matching file in lexicographic order.
///
/// # Errors
///
/// See [`load_statistics`].
pub fn select_statistics_file(
    dir: &Path,
    pattern: &str,
) -> Result<(PathBuf, Option<MultipleFilesWarning>), LoadError> {
    let mut matches = FileMatcher::new(pattern)?
        .matches_in(dir)
        .map_err(|source| LoadError::StatisticsFileRead {
            path: dir.to_path_buf(),
            source,
        })?
        .into_iter();

    let Some(chosen) = matches.next() else {
        return Err(LoadError::NoStatisticsFile {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    };

    let ignored: Vec<PathBuf> = matches.collect();
    let warning = (!ignored.is_empty()).then(|| MultipleFilesWarning {
        chosen: chosen.clone(),
        ignored,
    });
    Ok((chosen, warning))
}

/// Parse a statistics CSV into records, in file order.
///
/// # Errors
///
/// `StatisticsFileRead` for I/O failures, `MalformedStatisticsFile` otherwise.
pub fn read_statistics_file(path: &Path) -> Result<Vec<StatisticsRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::StatisticsFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| classify_csv_error(path, e))?
        .clone();
    for (name, alias) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name || h == alias) {
            return Err(LoadError::MalformedStatisticsFile {
                path: path.to_path_buf(),
                detail: format!("missing required column '{name}'"),
            });
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<StatisticsRecord>().enumerate() {
        let record = row.map_err(|e| classify_csv_error(path, e))?;
        record
            .validate()
            .map_err(|error| LoadError::MalformedStatisticsFile {
                path: path.to_path_buf(),
                detail: format!("row {}: {error}", index + 1),
            })?;
        records.push(record);
    }
    Ok(records)
}

fn classify_csv_error(path: &Path, error: csv::Error) -> LoadError {
    let detail = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::StatisticsFileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::MalformedStatisticsFile {
            path: path.to_path_buf(),
            detail,
        },
    }
}
