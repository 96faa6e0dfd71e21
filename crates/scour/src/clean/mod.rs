//! Cleaning strategies for dirty tables.

mod stats;
mod strategy;

pub use stats::{column_mean, column_median, column_population_std};
pub use strategy::{CleaningStrategy, Z_SCORE_THRESHOLD};
