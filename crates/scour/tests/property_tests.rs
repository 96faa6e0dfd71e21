//! Property-based tests for corruption and cleaning.
//!
//! These tests use proptest to generate random tables and plans and verify
//! that the pipeline maintains its invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: corruption and cleaning never crash on any input
//! 2. **Determinism**: the same plan and seed always produce the same table
//! 3. **Invariants**: the target column stays intact, row counts follow the
//!    plan, and cleaning never invents rows or columns
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p scour --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p scour --test property_tests
//! ```

use proptest::prelude::*;

use scour::{CleaningStrategy, CorruptionEngine, CorruptionPlan, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate a numeric table with a `quality` target column and 1-4 feature
/// columns. Roughly one cell in ten starts out missing.
fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..=4, 2usize..=40).prop_flat_map(|(n_features, n_rows)| {
        let cell = prop_oneof![
            9 => (-1000.0f64..1000.0).prop_map(Some),
            1 => Just(None),
        ];
        let row = prop::collection::vec(cell, n_features + 1);
        prop::collection::vec(row, n_rows).prop_map(move |rows| {
            let mut columns: Vec<String> = (0..n_features).map(|i| format!("f{i}")).collect();
            columns.push("quality".to_string());
            Table::new(columns, rows)
        })
    })
}

fn arb_plan() -> impl Strategy<Value = CorruptionPlan> {
    (
        0.0f64..=1.0,
        0.0f64..5.0,
        0usize..30,
        0.0f64..=1.0,
        -10.0f64..10.0,
        any::<u64>(),
    )
        .prop_map(
            |(missing_rate, noise_std, n_duplicates, outlier_rate, outlier_multiplier, seed)| {
                CorruptionPlan {
                    missing_rate,
                    noise_std,
                    n_duplicates,
                    outlier_rate,
                    outlier_multiplier,
                    seed,
                }
            },
        )
}

// =============================================================================
// Corruption Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_corruption_never_panics(table in arb_table(), plan in arb_plan()) {
        let _ = CorruptionEngine::new().corrupt(&table, "quality", &plan);
    }

    #[test]
    fn prop_corruption_is_deterministic(table in arb_table(), plan in arb_plan()) {
        let engine = CorruptionEngine::new();
        let a = engine.corrupt(&table, "quality", &plan);
        let b = engine.corrupt(&table, "quality", &plan);
        match (a, b) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one run failed, the other did not"),
        }
    }

    #[test]
    fn prop_corruption_row_count_follows_plan(table in arb_table(), plan in arb_plan()) {
        let dirty = CorruptionEngine::new().corrupt(&table, "quality", &plan).unwrap();
        prop_assert_eq!(dirty.row_count(), table.row_count() + plan.n_duplicates);
        prop_assert_eq!(dirty.columns(), table.columns());
    }

    #[test]
    fn prop_target_column_is_never_corrupted(table in arb_table(), plan in arb_plan()) {
        let dirty = CorruptionEngine::new().corrupt(&table, "quality", &plan).unwrap();
        let target = table.column_count() - 1;
        // Original rows keep their target values bit for bit; appended rows
        // are duplicates so their target values also come from the original.
        for i in 0..table.row_count() {
            prop_assert_eq!(dirty.get(i, target), table.get(i, target));
        }
    }

    #[test]
    fn prop_input_table_is_never_modified(table in arb_table(), plan in arb_plan()) {
        let before = table.clone();
        let _ = CorruptionEngine::new().corrupt(&table, "quality", &plan);
        prop_assert_eq!(table, before);
    }
}

// =============================================================================
// Cleaning Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_cleaning_never_panics(table in arb_table()) {
        for strategy in CleaningStrategy::registry().values() {
            let _ = strategy.apply(&table, "quality");
        }
    }

    #[test]
    fn prop_cleaning_never_adds_rows_or_drops_columns(table in arb_table()) {
        for strategy in CleaningStrategy::registry().values() {
            let cleaned = strategy.apply(&table, "quality").unwrap();
            prop_assert!(cleaned.row_count() <= table.row_count());
            prop_assert_eq!(cleaned.columns(), table.columns());
        }
    }

    // Z-score variants are excluded: dropping extreme rows shifts the
    // column statistics, so a second filtering pass can remove more rows.
    #[test]
    fn prop_impute_and_dedup_are_idempotent(table in arb_table()) {
        let strategies = [
            CleaningStrategy::MeanDedup,
            CleaningStrategy::MedianDedup,
            CleaningStrategy::DropnaDedup,
        ];
        for strategy in strategies {
            let once = strategy.apply(&table, "quality").unwrap();
            let twice = strategy.apply(&once, "quality").unwrap();
            prop_assert_eq!(&twice, &once);
        }
    }

    #[test]
    fn prop_dropna_output_has_no_missing_cells(table in arb_table()) {
        let cleaned = CleaningStrategy::DropnaDedup.apply(&table, "quality").unwrap();
        prop_assert_eq!(cleaned.missing_count(), 0);
    }
}
