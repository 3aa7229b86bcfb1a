use serde::Serialize;

use crate::errors::CoreError;

/// Number of points a density curve is evaluated at.
const CURVE_POINTS: usize = 200;

/// Fitness values of every individual in one generation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionSample {
    pub generation: usize,
    pub values: Vec<f64>,
}

impl DistributionSample {
    /// Build a sample, rejecting empty or non-finite value sets.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `values` is empty or contains NaN/infinity.
    pub fn new(generation: usize, values: Vec<f64>) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Err(CoreError::Validation(format!(
                "generation {generation} has no fitness values"
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CoreError::Validation(format!(
                "generation {generation} contains non-finite fitness value {bad}"
            )));
        }
        Ok(Self { generation, values })
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population (maximum-likelihood) standard deviation.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let var = self.values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / self.values.len() as f64;
        var.sqrt()
    }
}

/// Normal density fitted to a sample, evaluated over the sample's range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DensityCurve {
    pub mean: f64,
    pub std_dev: f64,
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    /// Fit a normal distribution to `sample`.
    ///
    /// Returns `None` when the sample has fewer than two values or no spread,
    /// since no meaningful curve exists.
    #[must_use]
    pub fn normal(sample: &DistributionSample) -> Option<Self> {
        if sample.values.len() < 2 {
            return None;
        }
        let mean = sample.mean();
        let std_dev = sample.std_dev();
        if std_dev <= 0.0 {
            return None;
        }

        let min = sample.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let step = (max - min) / (CURVE_POINTS - 1) as f64;
        let norm = 1.0 / (std_dev * (2.0 * std::f64::consts::PI).sqrt());

        let points = (0..CURVE_POINTS)
            .map(|i| {
                let x = (i as f64).mul_add(step, min);
                let z = (x - mean) / std_dev;
                (x, norm * (-0.5 * z * z).exp())
            })
            .collect();

        Some(Self {
            mean,
            std_dev,
            points,
        })
    }

    #[must_use]
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|p| p.1).fold(0.0, f64::max)
    }
}
