//! Triple exponential smoothing forecaster
//!
//! Selects between two modes from the series' seasonal viability:
//!
//! - **Full**: additive Holt-Winters with fixed smoothing weights, banded by
//!   the spread of in-sample residuals.
//! - **Fallback**: for series shorter than two seasonal periods, a flat
//!   forecast at the historical mean banded by the series' own standard
//!   deviation. This is a deliberate degradation, not an error.

use demand_spi::{
    DemandError, ForecastMethod, ForecastMode, ForecastResult, Forecaster, NormalizedSeries,
    Result, SeriesConfig, MIN_OBSERVATIONS,
};
use tracing::debug;

use crate::confidence::banded_forecast;
use crate::holt_winters::HoltWintersFit;
use crate::stats::{mean, population_std_dev};

/// Additive Holt-Winters forecaster with a mean/variance fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct HoltWintersForecaster;

impl HoltWintersForecaster {
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for HoltWintersForecaster {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::HoltWinters
    }

    fn forecast(&self, series: &NormalizedSeries, config: &SeriesConfig) -> Result<ForecastResult> {
        config.validate()?;
        let values = series.values();
        let last_date = checked_last_date(series)?;

        if series.seasonally_viable {
            if let Some(fit) = HoltWintersFit::fit(&values, config) {
                let sigma = population_std_dev(&fit.residuals(&values));
                debug!(
                    observations = values.len(),
                    residual_sigma = sigma,
                    "holt-winters fit"
                );
                return banded_forecast(
                    last_date,
                    &fit.project(config.horizon),
                    sigma,
                    ForecastMode::Full,
                );
            }
        }

        debug!(
            observations = values.len(),
            threshold = config.seasonal_threshold(),
            "series too short for seasonal fit, using mean model"
        );
        mean_model(series, config.horizon)
    }
}

/// Flat forecast at the series mean, banded by the series' standard deviation
pub fn mean_model(series: &NormalizedSeries, horizon: usize) -> Result<ForecastResult> {
    let values = series.values();
    let level = mean(&values);
    let sigma = population_std_dev(&values);
    match series.last_date() {
        Some(last_date) => {
            banded_forecast(last_date, &vec![level; horizon], sigma, ForecastMode::Fallback)
        }
        None => Ok(ForecastResult {
            points: Vec::new(),
            residual_sigma: sigma,
            mode: ForecastMode::Fallback,
        }),
    }
}

/// Last observed date of a series long enough to model
pub(crate) fn checked_last_date(series: &NormalizedSeries) -> Result<chrono::NaiveDate> {
    if series.len() < MIN_OBSERVATIONS {
        return Err(DemandError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: series.len(),
        });
    }
    series.last_date().ok_or(DemandError::InsufficientData {
        required: MIN_OBSERVATIONS,
        actual: 0,
    })
}
