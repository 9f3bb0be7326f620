use crate::config::AnalysisConfig;
use crate::data::model::{Dataset, Series};

use super::divergence::estimate;
use super::result::{AnalysisResult, ResultSet};

/// Analyze every series of `dataset` with the default delta.
///
/// The dataset must already have gone through
/// [`validate`](crate::data::validator::validate); nothing is re-checked here.
pub fn analyze(dataset: &Dataset) -> ResultSet {
    analyze_with(dataset, &AnalysisConfig::default())
}

/// Analyze every series of `dataset`. Results come back in column order.
pub fn analyze_with(dataset: &Dataset, config: &AnalysisConfig) -> ResultSet {
    let results = run(dataset.series(), config);

    let set = ResultSet::new(results);
    log::info!(
        "Analyzed {} series (delta = {:e}): {} chaotic",
        set.len(),
        config.delta,
        set.chaotic_count()
    );
    set
}

#[cfg(not(feature = "parallel"))]
fn run(series: &[Series], config: &AnalysisConfig) -> Vec<AnalysisResult> {
    series.iter().map(|s| analyze_series(s, config)).collect()
}

// Indexed collect keeps column order.
#[cfg(feature = "parallel")]
fn run(series: &[Series], config: &AnalysisConfig) -> Vec<AnalysisResult> {
    use rayon::prelude::*;

    series.par_iter().map(|s| analyze_series(s, config)).collect()
}

fn analyze_series(series: &Series, config: &AnalysisConfig) -> AnalysisResult {
    let divergence = estimate(&series.values, config.delta);
    let chaotic = divergence.mean > 0.0;

    log::debug!(
        "{}: n = {}, mean divergence = {:.4}, chaotic = {chaotic}",
        series.name,
        series.len(),
        divergence.mean
    );

    AnalysisResult {
        name: series.name.clone(),
        mean_divergence: divergence.mean,
        chaotic,
        points: divergence.points,
    }
}
