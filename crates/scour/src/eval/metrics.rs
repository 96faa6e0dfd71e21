//! Regression scoring metrics.

use crate::error::{Result, ScourError};

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ScourError::Model(format!(
            "prediction length mismatch: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ScourError::Model(
            "cannot score an empty prediction set".to_string(),
        ));
    }
    Ok(())
}

/// Mean squared error.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(sum / y_true.len() as f64)
}

/// Root mean squared error, `sqrt(mse)`.
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

/// Mean absolute error.
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let sum: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()).sum();
    Ok(sum / y_true.len() as f64)
}

/// Coefficient of determination (R²).
///
/// Fails on a degenerate (zero variance) truth vector, where R² is
/// undefined.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean) * (t - mean)).sum();
    if ss_tot == 0.0 {
        return Err(ScourError::Model(
            "degenerate target: zero variance in test partition".to_string(),
        ));
    }

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean_squared_error(&y, &y).unwrap(), 0.0);
        assert_eq!(root_mean_squared_error(&y, &y).unwrap(), 0.0);
        assert_eq!(mean_absolute_error(&y, &y).unwrap(), 0.0);
        assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_known_errors() {
        let y_true = [1.0, 2.0, 3.0];
        let y_pred = [2.0, 2.0, 2.0];
        assert_eq!(mean_squared_error(&y_true, &y_pred).unwrap(), 2.0 / 3.0);
        assert_eq!(mean_absolute_error(&y_true, &y_pred).unwrap(), 2.0 / 3.0);
        // ss_res = 2, ss_tot = 2.
        assert_eq!(r2_score(&y_true, &y_pred).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(mean_squared_error(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(mean_absolute_error(&[], &[]).is_err());
    }

    #[test]
    fn test_degenerate_target_variance() {
        let err = r2_score(&[5.0, 5.0, 5.0], &[4.0, 5.0, 6.0]).unwrap_err();
        assert!(matches!(err, crate::error::ScourError::Model(_)));
    }
}
