//! Minimum sample sizes under equal and ratio-constrained allocation.

use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::quantiles::validate_levels;
use crate::satterthwaite::validate_group_variances;
use crate::solver::{SampleSizePlan, SizeRhs, solve_min_size};
use crate::{DEFAULT_ALPHA, DEFAULT_ITERATION_LIMIT, DEFAULT_MIN_POWER};

/// Experiment design with the same sample size in every group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualSizeDesign {
    /// Per-group sample variances.
    pub s_squared: Vec<f64>,
    /// Smallest effect the test must be able to detect.
    pub theta: f64,
    /// Significance level (Type I error rate).
    pub alpha: f64,
    /// Minimum acceptable power.
    pub min_power: f64,
}

impl EqualSizeDesign {
    /// Design with the conventional `alpha = 0.05` and 80% power.
    pub fn new(s_squared: Vec<f64>, theta: f64) -> Self {
        Self {
            s_squared,
            theta,
            alpha: DEFAULT_ALPHA,
            min_power: DEFAULT_MIN_POWER,
        }
    }
}

/// Experiment design whose group sizes follow a fixed ratio vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSizeDesign {
    /// Per-group sample variances.
    pub s_squared: Vec<f64>,
    /// Per-group allocation ratios, index-aligned with `s_squared`. The
    /// first entry belongs to the reference group.
    pub ratio: Vec<f64>,
    /// Smallest effect the test must be able to detect.
    pub theta: f64,
    /// Significance level (Type I error rate).
    pub alpha: f64,
    /// Minimum acceptable power.
    pub min_power: f64,
}

impl RatioSizeDesign {
    /// Design with the conventional `alpha = 0.05` and 80% power.
    pub fn new(s_squared: Vec<f64>, ratio: Vec<f64>, theta: f64) -> Self {
        Self {
            s_squared,
            ratio,
            theta,
            alpha: DEFAULT_ALPHA,
            min_power: DEFAULT_MIN_POWER,
        }
    }
}

/// Minimum equal per-group sample size.
///
/// Solves `n > Q(alpha, min_power, df(n)) * (sum_g s_g^2) / theta^2` for the
/// smallest integer `n`, seeding from the normal approximation and refining
/// against the Student-t quantile at the Welch-Satterthwaite df.
///
/// # Examples
///
/// ```
/// use welchplan_stats::{EqualSizeDesign, equal_group_size};
///
/// let design = EqualSizeDesign::new(vec![0.25, 0.25], 0.1);
/// let plan = equal_group_size(&design).unwrap();
/// assert!(plan.n_min > 2);
/// ```
pub fn equal_group_size(design: &EqualSizeDesign) -> Result<SampleSizePlan, DesignError> {
    validate_group_variances(&design.s_squared)?;
    validate_levels(design.alpha, design.min_power)?;
    validate_theta(design.theta)?;

    let rhs = SizeRhs::Equal {
        s_squared: &design.s_squared,
    };
    solve_min_size(
        rhs,
        design.alpha,
        design.min_power,
        design.theta,
        DEFAULT_ITERATION_LIMIT,
    )
}

/// Minimum reference-group sample size under ratio-constrained allocation.
///
/// The weight of each group's variance is scaled by `k_1 / k_g`, so the
/// returned size belongs to the reference (first) group. The other groups
/// are sized by the caller as `n_min * k_g / k_1`; that scaling is not
/// applied here.
pub fn ratio_group_size(design: &RatioSizeDesign) -> Result<SampleSizePlan, DesignError> {
    validate_group_variances(&design.s_squared)?;
    validate_ratio(&design.ratio, design.s_squared.len())?;
    validate_levels(design.alpha, design.min_power)?;
    validate_theta(design.theta)?;

    let rhs = SizeRhs::Ratio {
        s_squared: &design.s_squared,
        ratio: &design.ratio,
    };
    solve_min_size(
        rhs,
        design.alpha,
        design.min_power,
        design.theta,
        DEFAULT_ITERATION_LIMIT,
    )
}

fn validate_theta(theta: f64) -> Result<(), DesignError> {
    if theta != 0.0 && theta.is_finite() {
        Ok(())
    } else {
        Err(DesignError::InvalidDesignParameters {
            reason: format!("theta must be non-zero and finite, got {}", theta),
        })
    }
}

fn validate_ratio(ratio: &[f64], groups: usize) -> Result<(), DesignError> {
    if ratio.is_empty() {
        return Err(DesignError::InvalidGroupData {
            reason: "at least one group ratio required".to_string(),
        });
    }
    if ratio.len() != groups {
        return Err(DesignError::InvalidGroupData {
            reason: format!(
                "ratio and variance vectors must have equal lengths: {} vs {}",
                ratio.len(),
                groups
            ),
        });
    }
    if let Some(&k) = ratio.iter().find(|&&k| !(k.is_finite() && k > 0.0)) {
        return Err(DesignError::InvalidGroupData {
            reason: format!("group ratios must be positive and finite, got {}", k),
        });
    }
    Ok(())
}
