//! Scour: a benchmark for data cleaning strategies on tabular datasets.
//!
//! Scour loads a numeric dataset, injects a reproducible dose of corruption
//! (missing values, noise, duplicate rows, outliers), cleans the dirty copy
//! with a family of strategies, scores each cleaned copy against a regression
//! task, and selects the strategy with the lowest RMSE.
//!
//! # Core Principles
//!
//! - **Reproducible**: corruption is fully determined by a seeded plan
//! - **Non-destructive**: the loaded table is never modified; every strategy
//!   cleans its own copy of the same dirty table
//! - **Pluggable scoring**: evaluation is a trait, so the built-in linear
//!   model can be swapped for any scorer
//!
//! # Example
//!
//! ```no_run
//! use scour::Scour;
//!
//! let scour = Scour::new();
//! let result = scour.run("winequality-red.csv").unwrap();
//!
//! println!("Best strategy: {}", result.report.best);
//! println!("Baseline RMSE: {:.4}", result.report.baseline.rmse);
//! ```

pub mod clean;
pub mod corrupt;
pub mod error;
pub mod eval;
pub mod input;
pub mod table;

mod scour;

pub use crate::scour::{RunResult, Scour, ScourConfig};
pub use clean::CleaningStrategy;
pub use corrupt::{CorruptionEngine, CorruptionPlan};
pub use error::{Result, ScourError};
pub use eval::{
    evaluate_all, ComparisonReport, EvaluationRecord, EvaluationService, LinearModelEvaluator,
    Metrics, ScriptedEvaluator,
};
pub use input::{write_delimited, Loader, LoaderConfig, SourceMetadata};
pub use table::{Cell, Table};
