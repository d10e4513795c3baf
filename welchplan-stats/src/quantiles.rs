//! Quantile differences of the reference distributions.
//!
//! Sample-size bounds and detectable effects are driven by the gap between
//! an upper-tail quantile at the significance level and a quantile at the
//! power target, taken from either the standard normal distribution (the
//! large-sample seed) or a Student-t distribution at the Welch-Satterthwaite
//! degrees of freedom.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::DesignError;

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// Student-t with `df` degrees of freedom. Callers validate `df` first, so
/// construction cannot fail.
fn t_dist(df: f64) -> StudentsT {
    StudentsT::new(0.0, 1.0, df).expect("valid df for t-distribution")
}

/// Check that significance level and power target lie in (0, 1).
pub(crate) fn validate_levels(alpha: f64, min_power: f64) -> Result<(), DesignError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(DesignError::InvalidDesignParameters {
            reason: format!("alpha must be in (0, 1), got {}", alpha),
        });
    }
    if !(min_power > 0.0 && min_power < 1.0) {
        return Err(DesignError::InvalidDesignParameters {
            reason: format!("min_power must be in (0, 1), got {}", min_power),
        });
    }
    Ok(())
}

fn validate_df(df: f64) -> Result<(), DesignError> {
    if !(df.is_finite() && df > 0.0) {
        return Err(DesignError::InvalidDesignParameters {
            reason: format!("degrees of freedom must be positive and finite, got {}", df),
        });
    }
    Ok(())
}

/// Difference between the standard normal quantiles at `1 - alpha` and
/// `1 - min_power`.
///
/// Positive in the usual regime (small `alpha`, large `min_power`). A caller
/// supplying `min_power < alpha` gets a self-consistent negative difference;
/// the sign is not special-cased, and the squared variants are indifferent
/// to it.
pub fn normal_quantile_diff(alpha: f64, min_power: f64) -> Result<f64, DesignError> {
    validate_levels(alpha, min_power)?;
    let normal = standard_normal();
    Ok(normal.inverse_cdf(1.0 - alpha) - normal.inverse_cdf(1.0 - min_power))
}

/// Squared normal quantile difference.
pub fn normal_quantile_diff_sq(alpha: f64, min_power: f64) -> Result<f64, DesignError> {
    normal_quantile_diff(alpha, min_power).map(|diff| diff * diff)
}

/// Difference between the Student-t quantiles at `1 - alpha` and
/// `1 - min_power` for `df` degrees of freedom.
pub fn t_quantile_diff(alpha: f64, min_power: f64, df: f64) -> Result<f64, DesignError> {
    validate_levels(alpha, min_power)?;
    validate_df(df)?;
    let t = t_dist(df);
    Ok(t.inverse_cdf(1.0 - alpha) - t.inverse_cdf(1.0 - min_power))
}

/// Squared Student-t quantile difference.
pub fn t_quantile_diff_sq(alpha: f64, min_power: f64, df: f64) -> Result<f64, DesignError> {
    t_quantile_diff(alpha, min_power, df).map(|diff| diff * diff)
}
