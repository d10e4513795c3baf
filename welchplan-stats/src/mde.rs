//! Minimum detectable effect for a fully specified design.

use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::quantiles::{t_quantile_diff, validate_levels};
use crate::satterthwaite::effective_df;
use crate::{DEFAULT_ALPHA, DEFAULT_MIN_POWER};

/// Experiment whose group sizes are already fixed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectableEffectDesign {
    /// Per-group sample variances.
    pub s_squared: Vec<f64>,
    /// Per-group sample sizes, index-aligned with `s_squared`.
    pub sizes: Vec<u64>,
    /// Significance level (Type I error rate).
    pub alpha: f64,
    /// Minimum acceptable power.
    pub min_power: f64,
}

impl DetectableEffectDesign {
    /// Design with the conventional `alpha = 0.05` and 80% power.
    pub fn new(s_squared: Vec<f64>, sizes: Vec<u64>) -> Self {
        Self {
            s_squared,
            sizes,
            alpha: DEFAULT_ALPHA,
            min_power: DEFAULT_MIN_POWER,
        }
    }
}

/// Smallest detectable effect, with the df it was evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectableEffect {
    /// Smallest effect detectable at the requested significance and power.
    pub theta_min: f64,
    /// Welch-Satterthwaite degrees of freedom of the design.
    pub df: f64,
}

/// Minimum detectable effect of a fixed design.
///
/// The group sizes are known, so the df is evaluated once and
///
/// ```text
/// theta_min = (T^-1(1-alpha, df) - T^-1(1-min_power, df)) * sqrt(sum_g s_g^2 / n_g)
/// ```
///
/// needs no iteration. This is the inverse direction of the sizing
/// operations: feeding their `n_min` back in recovers the design's theta up
/// to the ceiling granularity.
pub fn min_detectable_effect(
    design: &DetectableEffectDesign,
) -> Result<DetectableEffect, DesignError> {
    validate_levels(design.alpha, design.min_power)?;
    let df = effective_df(&design.s_squared, &design.sizes)?;
    let diff = t_quantile_diff(design.alpha, design.min_power, df)?;
    let spread = design
        .s_squared
        .iter()
        .zip(design.sizes.iter())
        .map(|(&s2, &n)| s2 / n as f64)
        .sum::<f64>()
        .sqrt();

    Ok(DetectableEffect {
        theta_min: diff * spread,
        df,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_arm_reference_scenario() {
        let design = DetectableEffectDesign::new(vec![0.25; 4], vec![247303; 4]);
        let effect = min_detectable_effect(&design).unwrap();
        assert!(
            (effect.theta_min - 0.005).abs() < 1e-5,
            "theta_min was {}",
            effect.theta_min
        );
    }

    #[test]
    fn test_known_small_design() {
        let design = DetectableEffectDesign::new(vec![0.25, 0.25], vec![40, 60]);
        let effect = min_detectable_effect(&design).unwrap();
        assert!((effect.df - 83.7336).abs() < 1e-3, "df was {}", effect.df);
        assert!(
            (effect.theta_min - 0.25609).abs() < 1e-4,
            "theta_min was {}",
            effect.theta_min
        );
    }

    #[test]
    fn test_more_samples_shrink_the_effect() {
        let coarse = DetectableEffectDesign::new(vec![0.25, 0.25], vec![40, 60]);
        let fine = DetectableEffectDesign::new(vec![0.25, 0.25], vec![400, 600]);
        let coarse = min_detectable_effect(&coarse).unwrap();
        let fine = min_detectable_effect(&fine).unwrap();
        assert!(fine.theta_min < coarse.theta_min);
    }

    #[test]
    fn test_group_data_validated() {
        let design = DetectableEffectDesign::new(vec![0.25, 0.25], vec![40]);
        let err = min_detectable_effect(&design).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGroupData { .. }));

        let design = DetectableEffectDesign::new(vec![0.25, 0.25], vec![40, 1]);
        let err = min_detectable_effect(&design).unwrap_err();
        assert!(matches!(err, DesignError::InvalidGroupData { .. }));
    }

    #[test]
    fn test_levels_validated() {
        let mut design = DetectableEffectDesign::new(vec![0.25], vec![40]);
        design.min_power = 1.0;
        let err = min_detectable_effect(&design).unwrap_err();
        assert!(matches!(err, DesignError::InvalidDesignParameters { .. }));
    }
}
