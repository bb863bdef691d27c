//! Additive trend / seasonal / residual decomposition
//!
//! Reports the Holt-Winters state over the observed span only. Because the
//! smoother and the decomposer share [`HoltWintersFit`], the seasonal phase of
//! step `t` is `t mod period` in both views and
//! `observed = trend + seasonal + residual` holds at every index.

use demand_spi::{Decomposer, DecompositionResult, NormalizedSeries, SeriesConfig};
use tracing::debug;

use crate::holt_winters::HoltWintersFit;

/// Decomposer built on the additive Holt-Winters state
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, series: &NormalizedSeries, config: &SeriesConfig) -> DecompositionResult {
        decompose_additive(series, config)
    }
}

/// Perform additive decomposition
///
/// Series too short for a seasonal fit decompose as pure trend.
pub fn decompose_additive(series: &NormalizedSeries, config: &SeriesConfig) -> DecompositionResult {
    let observed = series.values();
    let dates = series.dates();
    let n = observed.len();

    let fit = if series.seasonally_viable {
        HoltWintersFit::fit(&observed, config)
    } else {
        None
    };

    let Some(fit) = fit else {
        debug!(observations = n, "series too short for seasonal decomposition");
        return DecompositionResult {
            dates,
            trend: observed.clone(),
            seasonal: vec![0.0; n],
            residual: vec![0.0; n],
            observed,
        };
    };

    let trend: Vec<f64> = fit
        .level
        .iter()
        .zip(&fit.slope)
        .map(|(l, b)| l + b)
        .collect();
    let seasonal = fit.seasonal;
    let residual: Vec<f64> = observed
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((x, t), s)| x - t - s)
        .collect();

    DecompositionResult {
        dates,
        observed,
        trend,
        seasonal,
        residual,
    }
}
