//! Fixed-point iteration for minimum sample sizes.
//!
//! The required size depends on the t-quantile through the effective degrees
//! of freedom, and the degrees of freedom depend on the size. The solver
//! seeds a candidate from the normal approximation, then alternates
//! recomputing the df at the candidate with re-evaluating the t-quantile
//! bound until the candidate strictly exceeds the bound.

use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::quantiles::{normal_quantile_diff_sq, t_quantile_diff_sq};
use crate::satterthwaite::effective_df;

/// Right-hand side of the self-consistency inequality `n > rhs(df(n))`.
///
/// Closed over the two allocation rules; both share the shape
/// `quantile_diff_sq * weight / theta^2` and differ only in the variance
/// weight.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SizeRhs<'a> {
    /// Equal allocation: weight is the sum of group variances.
    Equal {
        /// Per-group sample variances.
        s_squared: &'a [f64],
    },
    /// Ratio-constrained allocation: weight is `sum_g k_1/k_g * s_g^2`,
    /// where `k_1` belongs to the reference group.
    Ratio {
        /// Per-group sample variances.
        s_squared: &'a [f64],
        /// Per-group allocation ratios, index-aligned with `s_squared`.
        ratio: &'a [f64],
    },
}

impl SizeRhs<'_> {
    fn s_squared(&self) -> &[f64] {
        match *self {
            SizeRhs::Equal { s_squared } | SizeRhs::Ratio { s_squared, .. } => s_squared,
        }
    }

    fn variance_weight(&self) -> f64 {
        match *self {
            SizeRhs::Equal { s_squared } => s_squared.iter().sum(),
            SizeRhs::Ratio { s_squared, ratio } => {
                let reference = ratio[0];
                s_squared
                    .iter()
                    .zip(ratio.iter())
                    .map(|(&s2, &k)| reference / k * s2)
                    .sum()
            }
        }
    }
}

/// Converged sample-size recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizePlan {
    /// Minimum required per-group size (the reference group's size under
    /// ratio allocation).
    pub n_min: u64,
    /// Welch-Satterthwaite degrees of freedom at `n_min`.
    pub df: f64,
    /// Refinement steps taken after the normal-approximation seed.
    pub iterations: usize,
}

/// Past 2^53 the f64 ceiling can no longer advance integer candidates.
const MAX_CANDIDATE: f64 = 9_007_199_254_740_992.0;

/// Smallest integer candidate for a real-valued bound, floored at 2 so the
/// `n - 1` divisor in the df stays positive.
fn candidate(bound: f64) -> u64 {
    bound.ceil().max(2.0) as u64
}

fn ensure_bounded(bound: f64, limit: usize) -> Result<(), DesignError> {
    if bound.is_finite() && bound < MAX_CANDIDATE {
        Ok(())
    } else {
        Err(DesignError::IterationLimitExceeded { limit })
    }
}

/// Find the smallest integer `n_min` with `n_min > rhs(params, df(n_min))`.
///
/// The df is re-evaluated with every group at the candidate size. The
/// candidate sequence is non-decreasing (t-quantiles shrink toward the
/// normal quantile as the df grows with the size), so the loop converges in
/// a handful of steps; `iteration_limit` caps the refinements for degenerate
/// inputs. Minimality holds at the converged fixed point; candidates below
/// the seed are never examined.
pub(crate) fn solve_min_size(
    rhs: SizeRhs<'_>,
    alpha: f64,
    min_power: f64,
    theta: f64,
    iteration_limit: usize,
) -> Result<SampleSizePlan, DesignError> {
    let scale = rhs.variance_weight() / (theta * theta);
    let groups = rhs.s_squared().len();

    // Seed from the normal approximation (df not yet known).
    let seed = normal_quantile_diff_sq(alpha, min_power)? * scale;
    ensure_bounded(seed, iteration_limit)?;
    let mut n_min = candidate(seed);
    let mut df = effective_df(rhs.s_squared(), &vec![n_min; groups])?;
    let mut bound = t_quantile_diff_sq(alpha, min_power, df)? * scale;

    let mut iterations = 0;
    loop {
        ensure_bounded(bound, iteration_limit)?;
        if (n_min as f64) > bound {
            break;
        }
        if iterations == iteration_limit {
            return Err(DesignError::IterationLimitExceeded {
                limit: iteration_limit,
            });
        }
        iterations += 1;
        // Ceiling update; the max(.., n_min + 1) keeps progress strict at an
        // exact-integer tie, where the plain ceiling would stall.
        n_min = candidate(bound).max(n_min + 1);
        df = effective_df(rhs.s_squared(), &vec![n_min; groups])?;
        bound = t_quantile_diff_sq(alpha, min_power, df)? * scale;
    }

    Ok(SampleSizePlan {
        n_min,
        df,
        iterations,
    })
}
