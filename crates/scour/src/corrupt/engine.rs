//! Corruption engine applying ordered defect steps to a clean table.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{Result, ScourError};
use crate::table::Table;

use super::plan::CorruptionPlan;

/// Applies a [`CorruptionPlan`] to a clean table, producing a dirty copy.
///
/// The four defect steps run in a fixed order (missing injection, additive
/// noise, row duplication, outlier injection) over a single seeded random
/// stream, so the result is fully reproducible for a given `(table, seed)`.
pub struct CorruptionEngine;

impl CorruptionEngine {
    /// Create a new corruption engine.
    pub fn new() -> Self {
        Self
    }

    /// Corrupt `table` according to `plan`. The input is never mutated.
    ///
    /// The target column is exempt from every cell-level defect; an empty
    /// feature set degrades the cell steps to no-ops rather than failing.
    pub fn corrupt(&self, table: &Table, target: &str, plan: &CorruptionPlan) -> Result<Table> {
        plan.validate()?;
        table.target_index(target)?;

        if table.row_count() == 0 {
            return Err(ScourError::Config(
                "cannot corrupt a table with zero rows".to_string(),
            ));
        }

        let features = table.feature_indices(target);
        let mut rng = StdRng::seed_from_u64(plan.seed);
        let mut dirty = table.clone();

        self.inject_missing(&mut dirty, &features, plan, &mut rng);
        self.add_noise(&mut dirty, &features, plan, &mut rng)?;
        self.duplicate_rows(&mut dirty, plan, &mut rng);
        self.inject_outliers(&mut dirty, &features, plan, &mut rng);

        Ok(dirty)
    }

    /// Step 1: set `floor(rate * n_feature_cells)` cells to missing.
    ///
    /// Both row and column picks are drawn with replacement; a cell selected
    /// twice is simply overwritten twice.
    fn inject_missing(
        &self,
        table: &mut Table,
        features: &[usize],
        plan: &CorruptionPlan,
        rng: &mut StdRng,
    ) {
        if features.is_empty() {
            return;
        }

        let n_rows = table.row_count();
        let n_cells = n_rows * features.len();
        let n_missing = (plan.missing_rate * n_cells as f64).floor() as usize;

        for _ in 0..n_missing {
            let row = rng.gen_range(0..n_rows);
            let col = features[rng.gen_range(0..features.len())];
            table.set(row, col, None);
        }
    }

    /// Step 2: add one Gaussian draw to every feature cell.
    ///
    /// A draw is consumed for missing cells too, so the stream position does
    /// not depend on which cells step 1 happened to blank out; the cell
    /// itself stays missing.
    fn add_noise(
        &self,
        table: &mut Table,
        features: &[usize],
        plan: &CorruptionPlan,
        rng: &mut StdRng,
    ) -> Result<()> {
        if features.is_empty() || plan.noise_std == 0.0 {
            return Ok(());
        }

        let normal = Normal::new(0.0, plan.noise_std)
            .map_err(|e| ScourError::Config(format!("invalid noise distribution: {e}")))?;

        for row in 0..table.row_count() {
            for &col in features {
                let eps = normal.sample(rng);
                if let Some(value) = table.get(row, col) {
                    table.set(row, col, Some(value + eps));
                }
            }
        }

        Ok(())
    }

    /// Step 3: sample `n_duplicates` rows with replacement from the current
    /// table and append verbatim copies after the last row.
    fn duplicate_rows(&self, table: &mut Table, plan: &CorruptionPlan, rng: &mut StdRng) {
        if plan.n_duplicates == 0 {
            return;
        }

        let rows_before = table.row_count();
        let mut copies = Vec::with_capacity(plan.n_duplicates);
        for _ in 0..plan.n_duplicates {
            let pick = rng.gen_range(0..rows_before);
            if let Some(row) = table.row(pick) {
                copies.push(row.to_vec());
            }
        }
        for row in copies {
            table.push_row(row);
        }
    }

    /// Step 4: multiply `floor(rate * row_count)` cells by the outlier
    /// multiplier, on the table after duplication.
    ///
    /// Rows are sampled without replacement, columns with replacement; a
    /// missing cell stays missing.
    fn inject_outliers(
        &self,
        table: &mut Table,
        features: &[usize],
        plan: &CorruptionPlan,
        rng: &mut StdRng,
    ) {
        if features.is_empty() {
            return;
        }

        let n_rows = table.row_count();
        let n_outliers = (plan.outlier_rate * n_rows as f64).floor() as usize;
        if n_outliers == 0 {
            return;
        }

        let row_picks = index::sample(rng, n_rows, n_outliers).into_vec();
        let col_picks: Vec<usize> = (0..n_outliers)
            .map(|_| features[rng.gen_range(0..features.len())])
            .collect();

        for (row, col) in row_picks.into_iter().zip(col_picks) {
            if let Some(value) = table.get(row, col) {
                table.set(row, col, Some(value * plan.outlier_multiplier));
            }
        }
    }
}

impl Default for CorruptionEngine {
    fn default() -> Self {
        Self::new()
    }
}
