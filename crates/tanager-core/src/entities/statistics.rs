use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One row of a statistics file: fitness summary for a single generation.
///
/// Header names follow the observer output (`num_generations`, `average_fit`,
/// `std_fit`, ...). The shorter aliases are accepted so hand-written files load
/// too. Unknown columns are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StatisticsRecord {
    #[serde(rename = "num_generations", alias = "generation")]
    pub generation: u32,
    #[serde(rename = "average_fit", alias = "average")]
    pub average: f64,
    #[serde(rename = "std_fit", alias = "std_dev")]
    pub std_dev: f64,
    #[serde(default)]
    pub pop_size: Option<u64>,
    #[serde(rename = "worst_fit", alias = "worst", default)]
    pub worst: Option<f64>,
    #[serde(rename = "best_fit", alias = "best", default)]
    pub best: Option<f64>,
    #[serde(rename = "med_fit", alias = "median", default)]
    pub median: Option<f64>,
}

impl StatisticsRecord {
    /// Reject values the fitness chart cannot plot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the average or standard deviation is
    /// NaN/infinite, or the standard deviation is negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        let generation = self.generation;
        if !self.average.is_finite() {
            return Err(CoreError::Validation(format!(
                "generation {generation} has non-finite average fitness {}",
                self.average
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(CoreError::Validation(format!(
                "generation {generation} has invalid fitness standard deviation {}",
                self.std_dev
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.average + self.std_dev
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.average - self.std_dev
    }
}

/// Chart-ready series derived from statistics records.
///
/// All four vectors are aligned: index `i` describes the same row.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatisticsSeries {
    pub generations: Vec<u32>,
    pub mean: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    /// Highest generation index + 1, or 0 when there are no rows.
    pub generation_count: usize,
    /// Last row in file order, kept for the summary line under the chart.
    pub last: Option<StatisticsRecord>,
}

impl StatisticsSeries {
    #[must_use]
    pub fn from_records(records: &[StatisticsRecord]) -> Self {
        let generation_count = records
            .iter()
            .map(|r| r.generation as usize + 1)
            .max()
            .unwrap_or(0);

        Self {
            generations: records.iter().map(|r| r.generation).collect(),
            mean: records.iter().map(|r| r.average).collect(),
            upper: records.iter().map(StatisticsRecord::upper_bound).collect(),
            lower: records.iter().map(StatisticsRecord::lower_bound).collect(),
            generation_count,
            last: records.last().cloned(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Smallest and largest value across the band, for axis scaling.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let min = self.lower.iter().chain(&self.mean).copied().reduce(f64::min)?;
        let max = self.upper.iter().chain(&self.mean).copied().reduce(f64::max)?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record(generation: u32, average: f64, std_dev: f64) -> StatisticsRecord {
        StatisticsRecord {
            generation,
            average,
            std_dev,
            pop_size: None,
            worst: None,
            best: None,
            median: None,
        }
    }

    #[test]
    fn bounds_are_mean_plus_minus_std() {
        let records = vec![record(0, 10.0, 2.5), record(1, 8.25, 0.0), record(2, -1.0, 0.5)];
        let series = StatisticsSeries::from_records(&records);

        assert_eq!(series.len(), 3);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(series.mean[i], r.average);
            assert_eq!(series.upper[i], r.average + r.std_dev);
            assert_eq!(series.lower[i], r.average - r.std_dev);
        }
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![0], 1)]
    #[case(vec![0, 1, 2, 3], 4)]
    #[case(vec![3, 1, 0], 4)]
    fn generation_count_is_max_index_plus_one(#[case] gens: Vec<u32>, #[case] expected: usize) {
        let records: Vec<_> = gens.into_iter().map(|g| record(g, 1.0, 0.1)).collect();
        assert_eq!(StatisticsSeries::from_records(&records).generation_count, expected);
    }

    #[rstest]
    #[case(f64::NAN, 0.5)]
    #[case(f64::INFINITY, 0.5)]
    #[case(1.0, f64::NAN)]
    #[case(1.0, f64::INFINITY)]
    #[case(1.0, -0.1)]
    fn validate_rejects_unplottable_values(#[case] average: f64, #[case] std_dev: f64) {
        assert!(matches!(
            record(2, average, std_dev).validate(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn validate_accepts_zero_spread() {
        assert!(record(0, -3.0, 0.0).validate().is_ok());
    }

    #[test]
    fn empty_series_has_no_value_range() {
        let series = StatisticsSeries::from_records(&[]);
        assert!(series.is_empty());
        assert!(series.value_range().is_none());
        assert!(series.last.is_none());
    }

    #[test]
    fn value_range_spans_band() {
        let series = StatisticsSeries::from_records(&[record(0, 5.0, 1.0), record(1, 2.0, 3.0)]);
        assert_eq!(series.value_range(), Some((-1.0, 6.0)));
    }

    #[test]
    fn deserializes_observer_headers_and_ignores_extras() {
        let data = "num_generations,pop_size,worst_fit,best_fit,med_fit,average_fit,std_fit,extra\n\
                    0,10,9.5,1.25,4.0,4.5,2.0,x\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<StatisticsRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("rows should parse");

        assert_eq!(
            rows,
            vec![StatisticsRecord {
                generation: 0,
                average: 4.5,
                std_dev: 2.0,
                pop_size: Some(10),
                worst: Some(9.5),
                best: Some(1.25),
                median: Some(4.0),
            }]
        );
    }

    #[test]
    fn deserializes_short_aliases() {
        let data = "generation,average,std_dev\n3,1.5,0.25\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<StatisticsRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("rows should parse");

        assert_eq!(rows, vec![record(3, 1.5, 0.25)]);
    }
}
