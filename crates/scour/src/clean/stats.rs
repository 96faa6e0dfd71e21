//! Column statistics and shared cleaning primitives.

use std::collections::HashSet;

use crate::table::{Cell, Table};

/// Mean of a column's non-missing values. `None` when the column is entirely
/// missing.
pub fn column_mean(table: &Table, col: usize) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in table.column_values(col) {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Median of a column's non-missing values (average of the middle two for an
/// even count). `None` when the column is entirely missing.
pub fn column_median(table: &Table, col: usize) -> Option<f64> {
    let mut values: Vec<f64> = table.column_values(col).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Mean and population standard deviation (divisor `n`, not `n - 1`) of a
/// column's non-missing values.
pub fn column_population_std(table: &Table, col: usize) -> Option<(f64, f64)> {
    let values: Vec<f64> = table.column_values(col).collect();
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}

/// Which statistic fills missing feature cells during imputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FillStat {
    Mean,
    Median,
}

/// Fill missing cells in the given columns with a per-column statistic.
///
/// A column whose every value is missing has no statistic and is left as-is.
pub(crate) fn impute(table: &Table, columns: &[usize], stat: FillStat) -> Table {
    let fills: Vec<(usize, Option<f64>)> = columns
        .iter()
        .map(|&col| {
            let fill = match stat {
                FillStat::Mean => column_mean(table, col),
                FillStat::Median => column_median(table, col),
            };
            (col, fill)
        })
        .collect();

    let mut out = table.clone();
    for (col, fill) in fills {
        let Some(fill) = fill else { continue };
        for row in 0..out.row_count() {
            if out.get(row, col).is_none() {
                out.set(row, col, Some(fill));
            }
        }
    }
    out
}

/// Drop rows that are exact duplicates of an earlier row (all columns equal),
/// keeping the first occurrence.
pub(crate) fn dedup_rows(table: &Table) -> Table {
    let mut seen: HashSet<Vec<(bool, u64)>> = HashSet::new();
    let mut keep = Vec::new();

    for i in 0..table.row_count() {
        let Some(row) = table.row(i) else { continue };
        if seen.insert(row_key(row)) {
            keep.push(i);
        }
    }

    table.select_rows(&keep)
}

/// Drop rows containing a missing value in any column.
pub(crate) fn drop_missing_rows(table: &Table) -> Table {
    let keep: Vec<usize> = (0..table.row_count())
        .filter(|&i| {
            table
                .row(i)
                .map(|r| r.iter().all(|c| c.is_some()))
                .unwrap_or(false)
        })
        .collect();
    table.select_rows(&keep)
}

/// Bit-exact hashable key for a row. Missing cells carry their own tag so
/// they never collide with a real value's bit pattern.
fn row_key(row: &[Cell]) -> Vec<(bool, u64)> {
    row.iter()
        .map(|c| match c {
            None => (false, 0),
            Some(v) => (true, v.to_bits()),
        })
        .collect()
}
