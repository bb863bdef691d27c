//! Trait for time series decomposition

use crate::model::{DecompositionResult, NormalizedSeries, SeriesConfig};

/// Splits an observed series into trend, seasonal and residual parts
pub trait Decomposer: Send + Sync {
    /// Decompose the observed span; no values past the last observation
    fn decompose(&self, series: &NormalizedSeries, config: &SeriesConfig) -> DecompositionResult;
}
