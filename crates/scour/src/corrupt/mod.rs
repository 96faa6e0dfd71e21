//! Synthetic defect injection for clean tables.

mod engine;
mod plan;

pub use engine::CorruptionEngine;
pub use plan::CorruptionPlan;
