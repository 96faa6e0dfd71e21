//! Runs every cleaning strategy through the evaluation service and selects
//! the best by RMSE.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::clean::CleaningStrategy;
use crate::error::{Result, ScourError};
use crate::table::Table;

use super::service::{EvaluationService, Metrics};

/// One strategy's scores plus the size of its cleaned table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Strategy name as registered.
    pub strategy: String,
    /// Row count of the cleaned table that was scored.
    pub rows_after: usize,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub runtime_seconds: f64,
}

impl EvaluationRecord {
    fn new(strategy: &str, rows_after: usize, metrics: Metrics) -> Self {
        Self {
            strategy: strategy.to_string(),
            rows_after,
            rmse: metrics.rmse,
            mae: metrics.mae,
            r2: metrics.r2,
            runtime_seconds: metrics.runtime_seconds,
        }
    }
}

/// Full comparison: the fixed baseline, every candidate in registration
/// order, and the selected best candidate's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// The manual baseline's result (never a selection candidate).
    pub baseline: EvaluationRecord,
    /// Candidate results, in registration order.
    pub strategies: IndexMap<String, EvaluationRecord>,
    /// Name of the candidate with the lowest RMSE.
    pub best: String,
}

impl ComparisonReport {
    /// The selected best candidate's record.
    pub fn best_record(&self) -> Option<&EvaluationRecord> {
        self.strategies.get(self.best.as_str())
    }
}

/// Run the baseline and every registered strategy against the dirty table,
/// scoring each cleaned copy with `service`.
///
/// Fail-fast: the first strategy whose cleaning or evaluation fails aborts
/// the comparison with that strategy's name attached. Selection takes the
/// strictly lowest RMSE; an exact tie goes to the earlier-registered
/// strategy.
pub fn evaluate_all(
    dirty: &Table,
    target: &str,
    registry: &IndexMap<&'static str, CleaningStrategy>,
    baseline: CleaningStrategy,
    service: &dyn EvaluationService,
) -> Result<ComparisonReport> {
    if registry.is_empty() {
        return Err(ScourError::Config("no strategies registered".to_string()));
    }

    let baseline_record = run_one(dirty, target, baseline.name(), baseline, service)?;

    let mut strategies = IndexMap::new();
    for (&name, &strategy) in registry {
        let record = run_one(dirty, target, name, strategy, service)?;
        strategies.insert(name.to_string(), record);
    }

    let mut best = String::new();
    let mut best_rmse = f64::INFINITY;
    for record in strategies.values() {
        if record.rmse < best_rmse {
            best_rmse = record.rmse;
            best = record.strategy.clone();
        }
    }

    Ok(ComparisonReport {
        baseline: baseline_record,
        strategies,
        best,
    })
}

/// Clean an independent copy of the dirty table and score it, tagging any
/// failure with the strategy name.
fn run_one(
    dirty: &Table,
    target: &str,
    name: &str,
    strategy: CleaningStrategy,
    service: &dyn EvaluationService,
) -> Result<EvaluationRecord> {
    let cleaned = strategy.apply(dirty, target).map_err(|e| tag(name, e))?;
    let metrics = service
        .evaluate(&cleaned, target)
        .map_err(|e| tag(name, e))?;
    Ok(EvaluationRecord::new(name, cleaned.row_count(), metrics))
}

fn tag(name: &str, error: ScourError) -> ScourError {
    match error {
        e @ ScourError::Evaluation { .. } => e,
        other => ScourError::Evaluation {
            strategy: name.to_string(),
            message: other.to_string(),
        },
    }
}
