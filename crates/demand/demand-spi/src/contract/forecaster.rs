//! Trait for horizon forecasting

use crate::error::Result;
use crate::model::{ForecastMethod, ForecastResult, NormalizedSeries, SeriesConfig};

/// Produces a banded point forecast from a normalized series
///
/// Implementations must be deterministic and must return exactly
/// `config.horizon` points with `0 <= lower <= expected <= upper`.
///
/// # Example
///
/// ```rust,ignore
/// use demand_spi::{Forecaster, NormalizedSeries, SeriesConfig};
///
/// fn total_demand<F: Forecaster>(f: &F, series: &NormalizedSeries) -> demand_spi::Result<f64> {
///     let config = SeriesConfig::default();
///     Ok(f.forecast(series, &config)?.expected_total(config.horizon))
/// }
/// ```
pub trait Forecaster: Send + Sync {
    /// Identifier reported alongside the forecast
    fn method(&self) -> ForecastMethod;

    /// Forecast `config.horizon` days past the last observation
    fn forecast(&self, series: &NormalizedSeries, config: &SeriesConfig)
        -> Result<ForecastResult>;
}
