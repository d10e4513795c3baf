#![warn(missing_docs)]
//! Welchplan Statistical Engine
//!
//! Design calculations for multi-arm experiments with unequal group variances
//! (the Behrens-Fisher setting of Welch's t-test):
//! - Welch-Satterthwaite effective degrees of freedom
//! - Minimum sample size under equal or ratio-constrained allocation
//! - Minimum detectable effect for fixed group sizes
//! - Normal and Student-t quantile differences backing all of the above
//!
//! Sample size and effective degrees of freedom depend on each other through
//! the Student-t quantile, so the sizing operations iterate the two to a
//! fixed point. The detectable-effect direction is closed form.
//!
//! Every operation is a pure function over caller-supplied values: no shared
//! state, no I/O, safe to call concurrently without coordination.

mod error;
mod mde;
mod quantiles;
mod satterthwaite;
mod sizing;
mod solver;

pub use error::DesignError;
pub use mde::{DetectableEffect, DetectableEffectDesign, min_detectable_effect};
pub use quantiles::{
    normal_quantile_diff, normal_quantile_diff_sq, t_quantile_diff, t_quantile_diff_sq,
};
pub use satterthwaite::effective_df;
pub use sizing::{EqualSizeDesign, RatioSizeDesign, equal_group_size, ratio_group_size};
pub use solver::SampleSizePlan;

/// Conventional significance level filled in by the design constructors
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Conventional minimum power filled in by the design constructors
pub const DEFAULT_MIN_POWER: f64 = 0.8;

/// Refinement-step cap for the sample-size iteration
///
/// Convergence is typically reached in one to three steps; the cap exists so
/// that degenerate inputs (effect sizes near zero) fail with
/// [`DesignError::IterationLimitExceeded`] instead of looping.
pub const DEFAULT_ITERATION_LIMIT: usize = 32;
