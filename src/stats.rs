//! ═══════════════════════════════════════════════════════════════════════════════
//! STATS — Fit-Metric Primitives
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Small pure helpers for comparing projected against observed series:
//! - mean / signed bias
//! - RMSE (root mean square error)
//! - MAE (mean absolute error)
//!
//! All operate on residual slices (predicted − observed). Empty input
//! yields 0.0; callers that care guard for it upstream.
//! ═══════════════════════════════════════════════════════════════════════════════

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Root mean square of residuals
pub fn rmse(residuals: &[f64]) -> f64 {
    if residuals.is_empty() {
        return 0.0;
    }
    let mean_sq = residuals.iter().map(|e| e * e).sum::<f64>() / residuals.len() as f64;
    mean_sq.sqrt()
}

/// Mean absolute residual
pub fn mae(residuals: &[f64]) -> f64 {
    if residuals.is_empty() {
        return 0.0;
    }
    residuals.iter().map(|e| e.abs()).sum::<f64>() / residuals.len() as f64
}

/// Signed bias: positive = systematic overestimate
pub fn bias(residuals: &[f64]) -> f64 {
    mean(residuals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_rmse() {
        // residuals 3, -4 -> sqrt((9+16)/2) = sqrt(12.5)
        let r = rmse(&[3.0, -4.0]);
        assert!((r - 12.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mae_ignores_sign() {
        assert_eq!(mae(&[1.0, -1.0]), 1.0);
        assert_eq!(bias(&[1.0, -1.0]), 0.0);
    }

    #[test]
    fn test_rmse_dominated_by_outliers() {
        // RMSE must exceed MAE when residuals are uneven
        let residuals = [0.1, 0.1, 2.0];
        assert!(rmse(&residuals) > mae(&residuals));
    }
}
