//! Cleaning strategy variants and the strategy registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::Table;

use super::stats::{self, FillStat};

/// A row is kept only if every feature z-score magnitude is strictly below
/// this threshold.
pub const Z_SCORE_THRESHOLD: f64 = 3.0;

/// A pure cleaning transform from a dirty table to a cleaned table.
///
/// Strategies never mutate their input and always return a table with a
/// dense `0..n` row range. The five registry variants are candidates for
/// selection; [`CleaningStrategy::ManualBaseline`] is the fixed reference
/// pipeline run alongside them, never a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStrategy {
    /// Mean imputation of features, then exact-duplicate removal.
    MeanDedup,
    /// Median imputation of features, then exact-duplicate removal.
    MedianDedup,
    /// Drop rows with any missing value, then exact-duplicate removal.
    DropnaDedup,
    /// Mean imputation, dedup, then the z-score row filter.
    MeanDedupZscore,
    /// Median imputation, dedup, then the z-score row filter.
    MedianDedupZscore,
    /// Fixed manual pipeline: mean imputation, dedup, z-score filter.
    ManualBaseline,
}

impl CleaningStrategy {
    /// Stable display name for reports.
    pub const fn name(&self) -> &'static str {
        match self {
            CleaningStrategy::MeanDedup => "mean+dedup",
            CleaningStrategy::MedianDedup => "median+dedup",
            CleaningStrategy::DropnaDedup => "dropna+dedup",
            CleaningStrategy::MeanDedupZscore => "mean+dedup+zscore",
            CleaningStrategy::MedianDedupZscore => "median+dedup+zscore",
            CleaningStrategy::ManualBaseline => "manual",
        }
    }

    /// The built-in candidate strategies, in fixed registration order.
    ///
    /// Registration order is the tie-breaker during selection, so this map
    /// must stay stable across runs.
    pub fn registry() -> IndexMap<&'static str, CleaningStrategy> {
        let mut registry = IndexMap::new();
        for strategy in [
            CleaningStrategy::MeanDedup,
            CleaningStrategy::MedianDedup,
            CleaningStrategy::DropnaDedup,
            CleaningStrategy::MeanDedupZscore,
            CleaningStrategy::MedianDedupZscore,
        ] {
            registry.insert(strategy.name(), strategy);
        }
        registry
    }

    /// Apply this strategy to `table`, producing an independent cleaned copy.
    ///
    /// The output retains every column of the input; only rows are dropped.
    pub fn apply(&self, table: &Table, target: &str) -> Result<Table> {
        table.target_index(target)?;
        let features = table.feature_indices(target);

        let cleaned = match self {
            CleaningStrategy::MeanDedup => {
                stats::dedup_rows(&stats::impute(table, &features, FillStat::Mean))
            }
            CleaningStrategy::MedianDedup => {
                stats::dedup_rows(&stats::impute(table, &features, FillStat::Median))
            }
            CleaningStrategy::DropnaDedup => {
                stats::dedup_rows(&stats::drop_missing_rows(table))
            }
            CleaningStrategy::MeanDedupZscore | CleaningStrategy::ManualBaseline => {
                let tmp = stats::dedup_rows(&stats::impute(table, &features, FillStat::Mean));
                zscore_filter(&tmp, &features)
            }
            CleaningStrategy::MedianDedupZscore => {
                let tmp = stats::dedup_rows(&stats::impute(table, &features, FillStat::Median));
                zscore_filter(&tmp, &features)
            }
        };

        Ok(cleaned)
    }
}

impl std::fmt::Display for CleaningStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Keep only rows where every feature z-score magnitude is strictly below
/// [`Z_SCORE_THRESHOLD`].
///
/// Statistics (mean, population stddev) are computed on the table as given,
/// i.e. after imputation and dedup have already shifted the distribution. A
/// zero-stddev column contributes z = 0 for every row; a still-missing cell
/// fails the test and drops its row.
fn zscore_filter(table: &Table, features: &[usize]) -> Table {
    let stats: Vec<(usize, Option<(f64, f64)>)> = features
        .iter()
        .map(|&col| (col, stats::column_population_std(table, col)))
        .collect();

    let keep: Vec<usize> = (0..table.row_count())
        .filter(|&row| {
            stats.iter().all(|&(col, moments)| {
                let Some((mean, std)) = moments else {
                    // Entirely-missing column: no statistic, no verdict.
                    return false;
                };
                match table.get(row, col) {
                    Some(value) => {
                        let z = if std == 0.0 { 0.0 } else { (value - mean) / std };
                        z.abs() < Z_SCORE_THRESHOLD
                    }
                    None => false,
                }
            })
        })
        .collect();

    table.select_rows(&keep)
}
