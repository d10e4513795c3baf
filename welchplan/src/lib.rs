#![warn(missing_docs)]
//! # Welchplan
//!
//! Experiment design for multi-arm studies with unequal group variances.
//!
//! Welchplan answers the planning questions around Welch's generalization of
//! the t-test (the Behrens-Fisher setting, where groups are heteroscedastic):
//! - **Degrees of Freedom**: Welch-Satterthwaite effective df from per-group
//!   variances and sizes
//! - **Sample Size**: minimum per-group size under equal allocation
//! - **Ratio Allocation**: minimum reference-group size when group sizes
//!   follow a fixed ratio vector
//! - **Detectable Effect**: smallest effect a fixed design can detect at the
//!   requested significance and power
//!
//! The required size and the effective df depend on each other through the
//! Student-t quantile, so the sizing operations iterate the two to a fixed
//! point with a guaranteed-progress integer ceiling rule; the
//! detectable-effect direction is closed form. All operations are pure and
//! re-entrant.
//!
//! ## Quick Start
//!
//! ```
//! use welchplan::{EqualSizeDesign, equal_group_size};
//!
//! // Two arms with variance 0.25 each; detect an effect of 0.1
//! // at alpha = 0.05 with 80% power.
//! let design = EqualSizeDesign::new(vec![0.25, 0.25], 0.1);
//! let plan = equal_group_size(&design).unwrap();
//!
//! assert!(plan.n_min > 100);
//! println!("enroll at least {} subjects per arm", plan.n_min);
//! ```
//!
//! ## Ratio-Constrained Arms
//!
//! ```
//! use welchplan::{RatioSizeDesign, ratio_group_size};
//!
//! // Treatment arms get five times the reference arm's enrollment.
//! let design = RatioSizeDesign::new(vec![0.25; 4], vec![1.0, 1.0, 5.0, 5.0], 0.1);
//! let plan = ratio_group_size(&design).unwrap();
//!
//! // Reference arm size; arm g is sized as n_min * k_g / k_1.
//! assert!(plan.n_min > 2);
//! ```

// Re-export the statistical engine's public surface
pub use welchplan_stats::{
    DesignError, DetectableEffect, DetectableEffectDesign, EqualSizeDesign, RatioSizeDesign,
    SampleSizePlan, effective_df, equal_group_size, min_detectable_effect, ratio_group_size,
};

// Re-export the shared defaults
pub use welchplan_stats::{DEFAULT_ALPHA, DEFAULT_ITERATION_LIMIT, DEFAULT_MIN_POWER};
