//! Baseline forecasters reported next to the Holt-Winters forecast
//!
//! Neither baseline models seasonality; they exist so a reader can judge how
//! much the seasonal model adds.

use demand_spi::{
    DemandError, ForecastMethod, ForecastMode, ForecastResult, Forecaster, NormalizedSeries,
    Result, SeriesConfig,
};

use crate::confidence::banded_forecast;
use crate::smoother::{checked_last_date, mean_model};
use crate::stats::{mean, population_std_dev};

/// Flat forecast at the mean of the trailing window
#[derive(Debug, Clone, Copy)]
pub struct MovingAverageForecaster {
    window: usize,
}

impl MovingAverageForecaster {
    pub const DEFAULT_WINDOW: usize = 7;

    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(DemandError::invalid_config(
                "moving_average_window",
                "must be positive",
            ));
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for MovingAverageForecaster {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
        }
    }
}

impl Forecaster for MovingAverageForecaster {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::MovingAverage
    }

    fn forecast(&self, series: &NormalizedSeries, config: &SeriesConfig) -> Result<ForecastResult> {
        config.validate()?;
        let last_date = checked_last_date(series)?;
        let values = series.values();
        let w = self.window;

        // Needs one out-of-window observation to measure residuals
        if values.len() <= w {
            return mean_model(series, config.horizon);
        }

        let residuals: Vec<f64> = (w..values.len())
            .map(|t| values[t] - mean(&values[t - w..t]))
            .collect();
        let level = mean(&values[values.len() - w..]);

        banded_forecast(
            last_date,
            &vec![level; config.horizon],
            population_std_dev(&residuals),
            ForecastMode::Full,
        )
    }
}

/// Single exponential smoothing with the configured level weight
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleExponentialForecaster;

impl SimpleExponentialForecaster {
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for SimpleExponentialForecaster {
    fn method(&self) -> ForecastMethod {
        ForecastMethod::SimpleExponential
    }

    fn forecast(&self, series: &NormalizedSeries, config: &SeriesConfig) -> Result<ForecastResult> {
        config.validate()?;
        let last_date = checked_last_date(series)?;
        let values = series.values();
        let alpha = config.alpha;

        let mut level = values[0];
        let mut residuals = Vec::with_capacity(values.len() - 1);
        for &x in &values[1..] {
            residuals.push(x - level);
            level = alpha * x + (1.0 - alpha) * level;
        }

        banded_forecast(
            last_date,
            &vec![level; config.horizon],
            population_std_dev(&residuals),
            ForecastMode::Full,
        )
    }
}
