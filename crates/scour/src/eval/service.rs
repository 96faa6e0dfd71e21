//! Evaluation service trait and metric types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::Table;

/// Scores produced by evaluating a cleaned table against the regression
/// task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Root mean squared error on the held-out partition.
    pub rmse: f64,
    /// Mean absolute error on the held-out partition.
    pub mae: f64,
    /// Coefficient of determination on the held-out partition.
    pub r2: f64,
    /// Wall-clock seconds spent fitting and scoring.
    pub runtime_seconds: f64,
}

/// Capability for scoring a cleaned table against a downstream regression
/// task.
///
/// The selector depends only on this seam, so tests can substitute a
/// scripted implementation returning fixed metrics.
pub trait EvaluationService {
    /// Fit and score a regression of `target` on the remaining columns.
    fn evaluate(&self, table: &Table, target: &str) -> Result<Metrics>;

    /// Name of this service (for reports and debugging).
    fn name(&self) -> &str;
}
