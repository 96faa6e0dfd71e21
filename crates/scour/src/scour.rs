//! Main Scour struct and public API.

use std::path::Path;

use serde::Serialize;

use crate::clean::CleaningStrategy;
use crate::corrupt::{CorruptionEngine, CorruptionPlan};
use crate::error::{Result, ScourError};
use crate::eval::{evaluate_all, ComparisonReport, EvaluationService, LinearModelEvaluator};
use crate::input::{Loader, LoaderConfig, SourceMetadata};
use crate::table::Table;

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct ScourConfig {
    /// Dataset loader configuration.
    pub loader: LoaderConfig,
    /// Corruption plan applied to the loaded table.
    pub plan: CorruptionPlan,
    /// Name of the regression target column.
    pub target: String,
}

impl Default for ScourConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            plan: CorruptionPlan::default(),
            target: "quality".to_string(),
        }
    }
}

/// Result of a full corrupt-clean-compare run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Row count of the clean table as loaded.
    pub clean_rows: usize,
    /// Row count after corruption.
    pub dirty_rows: usize,
    /// Missing cells in the dirty table.
    pub dirty_missing_cells: usize,
    /// Baseline and per-strategy comparison, plus the selected best.
    pub report: ComparisonReport,
}

/// The benchmark pipeline: load, corrupt once, clean with every strategy,
/// score each cleaned copy, and select the best strategy by RMSE.
pub struct Scour {
    config: ScourConfig,
    engine: CorruptionEngine,
    evaluator: Box<dyn EvaluationService>,
}

impl Scour {
    /// Create a pipeline with default configuration and the built-in
    /// linear-model evaluator.
    pub fn new() -> Self {
        Self::with_config(ScourConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ScourConfig) -> Self {
        Self {
            config,
            engine: CorruptionEngine::new(),
            evaluator: Box::new(LinearModelEvaluator::new()),
        }
    }

    /// Replace the evaluation service.
    ///
    /// The comparison treats evaluation as an opaque capability, so tests
    /// (or callers with their own model) can substitute any implementation.
    pub fn with_evaluator(mut self, evaluator: impl EvaluationService + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ScourConfig {
        &self.config
    }

    /// Run the full benchmark against a dataset file.
    pub fn run(&self, path: impl AsRef<Path>) -> Result<RunResult> {
        let (table, source, dirty) = self.load_and_corrupt(path)?;

        let registry = CleaningStrategy::registry();
        let report = evaluate_all(
            &dirty,
            &self.config.target,
            &registry,
            CleaningStrategy::ManualBaseline,
            self.evaluator.as_ref(),
        )?;

        Ok(RunResult {
            source,
            clean_rows: table.row_count(),
            dirty_rows: dirty.row_count(),
            dirty_missing_cells: dirty.missing_count(),
            report,
        })
    }

    /// Load a dataset and produce its dirty variant without evaluating.
    pub fn corrupt_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let (_, source, dirty) = self.load_and_corrupt(path)?;
        Ok((dirty, source))
    }

    fn load_and_corrupt(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata, Table)> {
        let loader = Loader::with_config(self.config.loader.clone());
        let (table, source) = loader.load(path)?;

        // Target presence and a usable feature set are checked up front;
        // nothing is corrupted on a misconfigured run.
        table.target_index(&self.config.target)?;
        if table.feature_indices(&self.config.target).is_empty() {
            return Err(ScourError::Config(
                "table has no feature columns".to_string(),
            ));
        }

        let dirty = self
            .engine
            .corrupt(&table, &self.config.target, &self.config.plan)?;
        Ok((table, source, dirty))
    }
}

impl Default for Scour {
    fn default() -> Self {
        Self::new()
    }
}
