//! Corruption plan configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

/// Configuration controlling synthetic defect injection.
///
/// Rates are *expected* fractions: the realized count of affected cells or
/// rows is `floor(rate * population_size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorruptionPlan {
    /// Fraction of feature cells set to missing.
    pub missing_rate: f64,
    /// Standard deviation of additive Gaussian noise on feature cells.
    pub noise_std: f64,
    /// Number of rows duplicated and appended.
    pub n_duplicates: usize,
    /// Fraction of rows (post-duplication) receiving one outlier cell.
    pub outlier_rate: f64,
    /// Multiplier applied to outlier cells.
    pub outlier_multiplier: f64,
    /// Seed determinizing every random choice.
    pub seed: u64,
}

impl Default for CorruptionPlan {
    fn default() -> Self {
        Self {
            missing_rate: 0.05,
            noise_std: 0.02,
            n_duplicates: 50,
            outlier_rate: 0.03,
            outlier_multiplier: 6.0,
            seed: 42,
        }
    }
}

impl CorruptionPlan {
    /// Check rates and parameters, rejecting the plan before anything is
    /// applied. Out-of-range values are an error, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.missing_rate) {
            return Err(ScourError::Config(format!(
                "missing_rate {} outside [0, 1]",
                self.missing_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.outlier_rate) {
            return Err(ScourError::Config(format!(
                "outlier_rate {} outside [0, 1]",
                self.outlier_rate
            )));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(ScourError::Config(format!(
                "noise_std {} must be finite and non-negative",
                self.noise_std
            )));
        }
        if !self.outlier_multiplier.is_finite() {
            return Err(ScourError::Config(format!(
                "outlier_multiplier {} must be finite",
                self.outlier_multiplier
            )));
        }
        Ok(())
    }
}
