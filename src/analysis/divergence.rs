//! Single-step divergence estimate for one series.
//!
//! For each step the previous sample is nudged by `delta` and compared with
//! the actual next sample:
//!
//! ```text
//! λ_i = ln(|x_{i-1} + δ - x_i| / δ)        i = 1..N-1
//! λ   = (1/N) Σ λ_i                        λ_0 = 0 is included in the sum
//! ```
//!
//! This is a simplified surrogate, not a phase-space Lyapunov exponent.
//! The mean divides by N, so the leading zero pulls short series towards 0.
//!
//! There are no NaN or infinity guards. Non-finite samples give NaN or
//! infinite points that propagate into the mean under IEEE-754 rules. A NaN
//! mean is not `> 0`, so such a series is reported as not chaotic.

use serde::Serialize;

/// Perturbation used when the caller does not pick one.
pub const DEFAULT_DELTA: f64 = 1e-8;

/// Output of [`estimate`]: the mean and the per-sample points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divergence {
    pub mean: f64,
    /// Same length as the input; `points[0]` is always 0.
    pub points: Vec<f64>,
}

/// Estimate the divergence indicator of `series`.
///
/// `delta` must be positive. An empty `series` yields no points and a NaN
/// mean; validated datasets never contain one.
pub fn estimate(series: &[f64], delta: f64) -> Divergence {
    debug_assert!(delta > 0.0, "delta must be positive, got {delta}");

    let mut points = vec![0.0; series.len()];

    for i in 1..series.len() {
        let perturbed = series[i - 1] + delta;
        let distance = (perturbed - series[i]).abs();
        // distance == 0 would be ln(0); the point stays 0
        if distance > 0.0 {
            points[i] = (distance / delta).ln();
        }
    }

    let mean = points.iter().sum::<f64>() / points.len() as f64;
    Divergence { mean, points }
}
