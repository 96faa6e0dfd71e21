//! Integration tests for Scour.

use std::io::Write;
use tempfile::NamedTempFile;

use scour::{
    CorruptionEngine, CorruptionPlan, Loader, Scour, ScourConfig, ScourError, ScriptedEvaluator,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// 100 rows, two features and a target, all numeric.
fn wine_like_csv() -> String {
    let mut out = String::from("acidity,sulphates,quality\n");
    for i in 0..100 {
        let acidity = 4.0 + (i as f64) * 0.07;
        let sulphates = 0.3 + ((i % 13) as f64) * 0.05;
        let quality = 3 + (i % 6);
        out.push_str(&format!("{acidity},{sulphates},{quality}\n"));
    }
    out
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_corruption_scenario_counts() {
    let file = create_test_file(&wine_like_csv());
    let (table, _) = Loader::new().load(file.path()).expect("load failed");

    let plan = CorruptionPlan {
        missing_rate: 0.1,
        noise_std: 0.0,
        n_duplicates: 5,
        outlier_rate: 0.0,
        outlier_multiplier: 6.0,
        seed: 7,
    };
    let dirty = CorruptionEngine::new()
        .corrupt(&table, "quality", &plan)
        .expect("corruption failed");

    assert_eq!(dirty.row_count(), 105);
    // 20 draws over feature cells; repeated picks can land on the same cell.
    let missing = dirty.missing_count();
    assert!(
        (15..=20).contains(&missing),
        "unexpected missing count {missing}"
    );
    assert_eq!(dirty.missing_in_column(2), 0);
}

#[test]
fn test_corruption_is_reproducible_across_loads() {
    let file = create_test_file(&wine_like_csv());
    let plan = CorruptionPlan {
        seed: 7,
        ..CorruptionPlan::default()
    };
    let engine = CorruptionEngine::new();

    let (table_a, _) = Loader::new().load(file.path()).unwrap();
    let (table_b, _) = Loader::new().load(file.path()).unwrap();
    let dirty_a = engine.corrupt(&table_a, "quality", &plan).unwrap();
    let dirty_b = engine.corrupt(&table_b, "quality", &plan).unwrap();

    assert_eq!(dirty_a, dirty_b);
}

// =============================================================================
// Full Pipeline Tests
// =============================================================================

#[test]
fn test_full_run_selects_lowest_rmse() {
    let file = create_test_file(&wine_like_csv());

    // Baseline, then the five registered strategies in order.
    let scour = Scour::new().with_evaluator(ScriptedEvaluator::new(vec![
        ScriptedEvaluator::metrics(0.72),
        ScriptedEvaluator::metrics(0.70),
        ScriptedEvaluator::metrics(0.68),
        ScriptedEvaluator::metrics(0.75),
        ScriptedEvaluator::metrics(0.64),
        ScriptedEvaluator::metrics(0.66),
    ]));
    let result = scour.run(file.path()).expect("run failed");

    assert_eq!(result.clean_rows, 100);
    assert_eq!(result.dirty_rows, 150);
    assert!(result.dirty_missing_cells > 0);
    assert_eq!(result.report.best, "mean+dedup+zscore");
    assert_eq!(result.report.baseline.strategy, "manual");
    assert_eq!(result.report.strategies.len(), 5);
}

#[test]
fn test_full_run_with_builtin_evaluator() {
    // A target with an exact linear relation to the features survives mild
    // corruption well enough for the linear model to fit every cleaned copy.
    let mut content = String::from("a,b,quality\n");
    for i in 0..120 {
        let a = i as f64;
        let b = (i % 17) as f64;
        let quality = 2.0 * a - 0.5 * b + 1.0;
        content.push_str(&format!("{a},{b},{quality}\n"));
    }
    let file = create_test_file(&content);

    let config = ScourConfig {
        plan: CorruptionPlan {
            missing_rate: 0.02,
            noise_std: 0.01,
            n_duplicates: 10,
            outlier_rate: 0.01,
            ..CorruptionPlan::default()
        },
        ..ScourConfig::default()
    };
    let result = Scour::with_config(config)
        .run(file.path())
        .expect("run failed");

    assert_eq!(result.report.strategies.len(), 5);
    assert!(result.report.strategies.contains_key(&result.report.best));
    for record in result.report.strategies.values() {
        assert!(record.rmse.is_finite());
        assert!(record.rows_after > 0);
        assert!(record.runtime_seconds >= 0.0);
    }
}

#[test]
fn test_run_result_serializes_to_json() {
    let file = create_test_file(&wine_like_csv());
    let scour = Scour::new().with_evaluator(ScriptedEvaluator::new(vec![
        ScriptedEvaluator::metrics(0.5);
        6
    ]));
    let result = scour.run(file.path()).unwrap();

    let json = serde_json::to_string_pretty(&result).expect("serialization failed");
    assert!(json.contains("\"best\""));
    assert!(json.contains("\"baseline\""));
    assert!(json.contains("\"rmse\""));
}

// =============================================================================
// Error Path Tests
// =============================================================================

#[test]
fn test_missing_target_column() {
    let file = create_test_file("a,b,score\n1,2,3\n4,5,6\n");
    let err = Scour::new().run(file.path()).unwrap_err();

    match err {
        ScourError::MissingTarget { column, available } => {
            assert_eq!(column, "quality");
            assert_eq!(available, vec!["a", "b", "score"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_no_feature_columns() {
    let file = create_test_file("quality\n5\n6\n7\n");
    let err = Scour::new().run(file.path()).unwrap_err();

    assert!(matches!(err, ScourError::Config(_)));
}

#[test]
fn test_non_numeric_cell_rejected_at_load() {
    let file = create_test_file("a,quality\n1.5,5\noops,6\n");
    let err = Scour::new().run(file.path()).unwrap_err();

    match err {
        ScourError::Parse { row, column, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}
