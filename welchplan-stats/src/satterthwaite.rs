//! Welch-Satterthwaite effective degrees of freedom.
//!
//! When group variances differ, the reference t-distribution for a
//! multi-group comparison has no clean integer degrees of freedom. The
//! Welch-Satterthwaite approximation pools the per-group variance-to-size
//! ratios into a single effective value.

use crate::error::DesignError;

/// Compute the Welch-Satterthwaite effective degrees of freedom.
///
/// With per-group sample variances `s_squared` and sizes `sizes`, and
/// `psi_g = s_g^2 / n_g`:
///
/// ```text
/// df = (sum_g psi_g)^2 / sum_g (psi_g^2 / (n_g - 1))
/// ```
///
/// Every group needs a strictly positive, finite variance and a size above 1
/// (the `n_g - 1` divisor). Group counts in this domain are small (two to
/// ten arms), so plain sequential accumulation is used.
///
/// # Examples
///
/// ```
/// use welchplan_stats::effective_df;
///
/// // Identical groups degenerate to k * (n - 1).
/// let df = effective_df(&[0.5, 0.5], &[100, 100]).unwrap();
/// assert!((df - 198.0).abs() < 1e-9);
/// ```
pub fn effective_df(s_squared: &[f64], sizes: &[u64]) -> Result<f64, DesignError> {
    validate_group_variances(s_squared)?;
    if sizes.len() != s_squared.len() {
        return Err(DesignError::InvalidGroupData {
            reason: format!(
                "variance and size vectors must have equal lengths: {} vs {}",
                s_squared.len(),
                sizes.len()
            ),
        });
    }
    if let Some(&n) = sizes.iter().find(|&&n| n <= 1) {
        return Err(DesignError::InvalidGroupData {
            reason: format!("every group size must exceed 1, got {}", n),
        });
    }

    let mut pooled = 0.0;
    let mut spread = 0.0;
    for (&s2, &n) in s_squared.iter().zip(sizes) {
        let psi = s2 / n as f64;
        pooled += psi;
        spread += psi * psi / (n as f64 - 1.0);
    }
    Ok(pooled * pooled / spread)
}

/// Check that a variance vector is non-empty with positive, finite entries.
pub(crate) fn validate_group_variances(s_squared: &[f64]) -> Result<(), DesignError> {
    if s_squared.is_empty() {
        return Err(DesignError::InvalidGroupData {
            reason: "at least one group variance required".to_string(),
        });
    }
    if let Some(&s2) = s_squared.iter().find(|&&s2| !(s2.is_finite() && s2 > 0.0)) {
        return Err(DesignError::InvalidGroupData {
            reason: format!("group variances must be positive and finite, got {}", s2),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_value() {
        let df = effective_df(&[0.25, 0.1, 0.2, 2.0], &[100, 100, 100, 100]).unwrap();
        assert!((df - 156.53).abs() < 0.01, "df was {}", df);
    }

    #[test]
    fn test_permutation_symmetry() {
        // Reordering groups identically leaves the df unchanged
        let df_fwd = effective_df(&[0.25, 0.1, 0.2, 2.0], &[50, 100, 150, 200]).unwrap();
        let df_rev = effective_df(&[2.0, 0.2, 0.1, 0.25], &[200, 150, 100, 50]).unwrap();
        assert!((df_fwd - df_rev).abs() < 1e-12);
        assert!((df_fwd - 290.3549).abs() < 1e-3, "df was {}", df_fwd);
    }

    #[test]
    fn test_equal_groups_closed_form() {
        // With identical variances and sizes every psi term coincides and
        // the df degenerates to k * (n - 1).
        for &k in &[2usize, 4] {
            for &n in &[50u64, 200] {
                let df = effective_df(&vec![0.7; k], &vec![n; k]).unwrap();
                let expected = k as f64 * (n as f64 - 1.0);
                assert!(
                    (df - expected).abs() < 1e-9,
                    "k={} n={}: df {} vs expected {}",
                    k,
                    n,
                    df,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_single_group() {
        let df = effective_df(&[2.5], &[100]).unwrap();
        assert!((df - 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = effective_df(&[1.0, 2.0], &[10]).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGroupData { .. }));
    }

    #[test]
    fn test_empty_groups() {
        let err = effective_df(&[], &[]).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGroupData { .. }));
    }

    #[test]
    fn test_size_of_one_rejected() {
        // n - 1 divisor would hit zero
        let err = effective_df(&[1.0, 2.0], &[10, 1]).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGroupData { .. }));
    }

    #[test]
    fn test_bad_variances_rejected() {
        for s2 in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = effective_df(&[0.5, s2], &[10, 10]).unwrap_err();
            assert!(
                matches!(err, DesignError::InvalidGroupData { .. }),
                "variance {} should be rejected",
                s2
            );
        }
    }
}
