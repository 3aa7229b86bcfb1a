//! Population fitness samples for the distribution chart.
//!
//! The population table is tab separated with a header row. Data row `i`
//! holds generation `i`: an identifying first column, one fitness value per
//! individual, then two trailing bookkeeping columns that are not fitness.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tanager_config::DataConfig;
use tanager_core::entities::DistributionSample;

use crate::error::LoadError;
use crate::pattern::FileMatcher;

/// Identifier column plus the two trailing columns.
const NON_VALUE_COLUMNS: usize = 3;

/// Load the fitness values of `generation` for the project in `dir`.
///
/// # Errors
///
/// Every failure (no table, unreadable table, missing row, bad values) is
/// reported as `LoadError::DistributionData`.
pub fn load_distribution(
    dir: &Path,
    generation: usize,
    config: &DataConfig,
) -> Result<DistributionSample, LoadError> {
    let path = locate_distribution_file(dir, config)?;
    tracing::info!(path = %path.display(), generation, "reading population table");
    read_distribution_row(&path, generation)
}

/// The configured fixed table, or the first matching table in `dir`.
///
/// # Errors
///
/// `LoadError::DistributionData` when no table can be found.
pub fn locate_distribution_file(dir: &Path, config: &DataConfig) -> Result<PathBuf, LoadError> {
    if let Some(fixed) = &config.distribution_file {
        return Ok(fixed.clone());
    }

    let matches = FileMatcher::new(&config.distribution_pattern)
        .map_err(|e| data_error(dir, e.to_string()))?
        .matches_in(dir)
        .map_err(|e| data_error(dir, format!("cannot list directory: {e}")))?;

    if matches.len() > 1 {
        tracing::warn!(
            dir = %dir.display(),
            count = matches.len(),
            "more than one population table found; using the first"
        );
    }

    matches.into_iter().next().ok_or_else(|| {
        data_error(
            dir,
            format!(
                "no population table matching '{}'",
                config.distribution_pattern
            ),
        )
    })
}

/// Read data row `generation` of a population table.
///
/// # Errors
///
/// `LoadError::DistributionData` for I/O failures, a missing row, too few
/// columns or non-numeric fitness values.
pub fn read_distribution_row(path: &Path, generation: usize) -> Result<DistributionSample, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| data_error(path, e.to_string()))?;

    let mut rows = reader.records();
    for _ in 0..generation {
        match rows.next() {
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(data_error(path, e.to_string())),
            None => break,
        }
    }

    let record = match rows.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(data_error(path, e.to_string())),
        None => {
            return Err(data_error(
                path,
                format!("no row for generation {generation}"),
            ));
        }
    };

    if record.len() < NON_VALUE_COLUMNS {
        return Err(data_error(
            path,
            format!(
                "row for generation {generation} has {} columns; expected an id, values and two trailing columns",
                record.len()
            ),
        ));
    }

    let values = record
        .iter()
        .skip(1)
        .take(record.len() - NON_VALUE_COLUMNS)
        .map(|cell| {
            cell.parse::<f64>()
                .map_err(|_| data_error(path, format!("non-numeric fitness value '{cell}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    DistributionSample::new(generation, values).map_err(|e| data_error(path, e.to_string()))
}

fn data_error(path: &Path, detail: String) -> LoadError {
    LoadError::DistributionData {
        path: path.to_path_buf(),
        detail,
    }
}
