//! Size a four-arm experiment with heteroscedastic arms end to end.
//!
//! Run with: cargo run --example plan_study

use welchplan::{
    DetectableEffectDesign, EqualSizeDesign, RatioSizeDesign, equal_group_size,
    min_detectable_effect, ratio_group_size,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pilot variances for the four arms; the last arm is much noisier.
    let s_squared = vec![0.25, 0.1, 0.2, 2.0];
    let theta = 0.05;

    // Equal enrollment across all arms.
    let equal = EqualSizeDesign::new(s_squared.clone(), theta);
    let plan = equal_group_size(&equal)?;
    println!(
        "equal allocation:  n >= {} per arm (df {:.1}, {} refinement steps)",
        plan.n_min, plan.df, plan.iterations
    );

    // Give the noisy arms double enrollment instead.
    let ratio = RatioSizeDesign::new(s_squared.clone(), vec![1.0, 1.0, 2.0, 2.0], theta);
    let ratio_plan = ratio_group_size(&ratio)?;
    println!(
        "ratio [1,1,2,2]:   reference arm n >= {} (scale the others by k_g/k_1)",
        ratio_plan.n_min
    );

    // What could the equal-allocation design detect at that size?
    let fixed = DetectableEffectDesign::new(s_squared, vec![plan.n_min; 4]);
    let effect = min_detectable_effect(&fixed)?;
    println!("detectable effect: {:.5} at n = {}", effect.theta_min, plan.n_min);

    // Plans serialize for CI dashboards and notebooks.
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
