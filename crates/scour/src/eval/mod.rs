//! Strategy evaluation and selection.

mod metrics;
mod model;
mod scripted;
mod selector;
mod service;

pub use metrics::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};
pub use model::LinearModelEvaluator;
pub use scripted::ScriptedEvaluator;
pub use selector::{evaluate_all, ComparisonReport, EvaluationRecord};
pub use service::{EvaluationService, Metrics};
