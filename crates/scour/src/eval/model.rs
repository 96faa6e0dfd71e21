//! Built-in evaluation service: deterministic train/test split plus a
//! least-squares linear fit.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, ScourError};
use crate::table::Table;

use super::metrics;
use super::service::{EvaluationService, Metrics};

/// Scores a table by fitting a linear regression on a deterministic
/// shuffled train partition and scoring the held-out test partition.
///
/// The split permutation depends only on the evaluator's seed and the row
/// count, so repeated evaluations of the same table produce identical
/// metrics (runtime aside).
pub struct LinearModelEvaluator {
    /// Fraction of rows held out for scoring.
    test_size: f64,
    /// Seed for the split permutation.
    seed: u64,
}

impl LinearModelEvaluator {
    /// Create an evaluator with the default 80/20 split and seed 42.
    pub fn new() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }

    /// Set the held-out fraction.
    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    /// Set the split seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for LinearModelEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationService for LinearModelEvaluator {
    fn evaluate(&self, table: &Table, target: &str) -> Result<Metrics> {
        let start = Instant::now();

        if !(0.0..1.0).contains(&self.test_size) || self.test_size == 0.0 {
            return Err(ScourError::Config(format!(
                "test_size {} outside (0, 1)",
                self.test_size
            )));
        }

        let target_idx = table.target_index(target)?;
        let features = table.feature_indices(target);

        let missing = table.missing_count();
        if missing > 0 {
            return Err(ScourError::Model(format!(
                "model input contains {missing} missing values"
            )));
        }

        let n = table.row_count();
        let n_test = (n as f64 * self.test_size).ceil() as usize;
        if n_test == 0 || n_test >= n {
            return Err(ScourError::Model(format!(
                "insufficient rows to split: {n} rows with test_size {}",
                self.test_size
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);
        let (test_idx, train_idx) = indices.split_at(n_test);

        let row_of = |i: usize| -> (Vec<f64>, f64) {
            // Missing cells were rejected above; defaulting keeps this total.
            let x = features
                .iter()
                .map(|&c| table.get(i, c).unwrap_or_default())
                .collect();
            let y = table.get(i, target_idx).unwrap_or_default();
            (x, y)
        };

        let (x_train, y_train): (Vec<Vec<f64>>, Vec<f64>) =
            train_idx.iter().map(|&i| row_of(i)).unzip();
        let (x_test, y_test): (Vec<Vec<f64>>, Vec<f64>) =
            test_idx.iter().map(|&i| row_of(i)).unzip();

        let weights = fit_least_squares(&x_train, &y_train)?;
        let y_pred: Vec<f64> = x_test.iter().map(|x| predict(&weights, x)).collect();

        let rmse = metrics::root_mean_squared_error(&y_test, &y_pred)?;
        let mae = metrics::mean_absolute_error(&y_test, &y_pred)?;
        let r2 = metrics::r2_score(&y_test, &y_pred)?;

        Ok(Metrics {
            rmse,
            mae,
            r2,
            runtime_seconds: start.elapsed().as_secs_f64(),
        })
    }

    fn name(&self) -> &str {
        "linear-least-squares"
    }
}

/// Fit `y ≈ w·[1, x]` by solving the normal equations.
///
/// A small ridge term on the diagonal keeps the system solvable when a
/// feature column is constant or collinear with another.
fn fit_least_squares(x: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>> {
    if x.is_empty() {
        return Err(ScourError::Model(
            "cannot fit a model on an empty train partition".to_string(),
        ));
    }

    let k = x[0].len() + 1;
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];

    for (row, &target) in x.iter().zip(y) {
        let augmented: Vec<f64> = std::iter::once(1.0).chain(row.iter().copied()).collect();
        for i in 0..k {
            for j in 0..k {
                xtx[i][j] += augmented[i] * augmented[j];
            }
            xty[i] += augmented[i] * target;
        }
    }

    const RIDGE: f64 = 1e-8;
    for (i, row) in xtx.iter_mut().enumerate() {
        row[i] += RIDGE;
    }

    solve(xtx, xty)
}

/// Predict one row with fitted weights (intercept first).
fn predict(weights: &[f64], x: &[f64]) -> f64 {
    weights[0]
        + weights[1..]
            .iter()
            .zip(x)
            .map(|(w, v)| w * v)
            .sum::<f64>()
}

/// Solve `a · w = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| {
                a[i][col]
                    .abs()
                    .partial_cmp(&a[j][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        if a[pivot][col].abs() < f64::EPSILON {
            return Err(ScourError::Model(
                "singular design matrix in least-squares fit".to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for j in col..n {
                a[row][j] -= factor * a[col][j];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut w = vec![0.0; n];
    for col in (0..n).rev() {
        let tail: f64 = ((col + 1)..n).map(|j| a[col][j] * w[j]).sum();
        w[col] = (b[col] - tail) / a[col][col];
    }

    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_table(n: usize) -> Table {
        // y = 2a - b + 3, exactly linear.
        let columns = vec!["a".to_string(), "b".to_string(), "y".to_string()];
        let rows = (0..n)
            .map(|i| {
                let a = i as f64;
                let b = (i % 5) as f64;
                vec![Some(a), Some(b), Some(2.0 * a - b + 3.0)]
            })
            .collect();
        Table::new(columns, rows)
    }

    #[test]
    fn test_recovers_exact_linear_relation() {
        let table = linear_table(50);
        let metrics = LinearModelEvaluator::new().evaluate(&table, "y").unwrap();

        assert!(metrics.rmse < 1e-6, "rmse too high: {}", metrics.rmse);
        assert!(metrics.mae < 1e-6);
        assert!(metrics.r2 > 0.999999);
        assert!(metrics.runtime_seconds >= 0.0);
    }

    #[test]
    fn test_deterministic_metrics() {
        let table = linear_table(40);
        let evaluator = LinearModelEvaluator::new();
        let a = evaluator.evaluate(&table, "y").unwrap();
        let b = evaluator.evaluate(&table, "y").unwrap();

        assert_eq!(a.rmse, b.rmse);
        assert_eq!(a.mae, b.mae);
        assert_eq!(a.r2, b.r2);
    }

    #[test]
    fn test_rejects_missing_cells() {
        let mut table = linear_table(20);
        table.set(3, 0, None);
        let err = LinearModelEvaluator::new().evaluate(&table, "y").unwrap_err();
        assert!(matches!(err, ScourError::Model(_)));
    }

    #[test]
    fn test_rejects_too_few_rows() {
        let table = linear_table(1);
        let err = LinearModelEvaluator::new().evaluate(&table, "y").unwrap_err();
        assert!(matches!(err, ScourError::Model(_)));
    }

    #[test]
    fn test_degenerate_target_fails() {
        let columns = vec!["a".to_string(), "y".to_string()];
        let rows = (0..30).map(|i| vec![Some(i as f64), Some(5.0)]).collect();
        let table = Table::new(columns, rows);

        let err = LinearModelEvaluator::new().evaluate(&table, "y").unwrap_err();
        assert!(matches!(err, ScourError::Model(_)));
    }

    #[test]
    fn test_missing_target_column() {
        let table = linear_table(10);
        let err = LinearModelEvaluator::new()
            .evaluate(&table, "score")
            .unwrap_err();
        assert!(matches!(err, ScourError::MissingTarget { .. }));
    }
}
