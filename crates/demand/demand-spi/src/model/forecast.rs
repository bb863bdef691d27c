//! Forecast output models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which model produced a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMode {
    /// Full additive Holt-Winters, or a baseline's own recursion
    Full,
    /// Mean/standard-deviation model used for short series
    Fallback,
}

/// Forecasting method identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    HoltWinters,
    MovingAverage,
    SimpleExponential,
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoltWinters => write!(f, "holt_winters"),
            Self::MovingAverage => write!(f, "moving_average"),
            Self::SimpleExponential => write!(f, "simple_exponential"),
        }
    }
}

/// One forecast day with its 95% band
///
/// Invariant: `0 <= lower_bound <= expected <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub expected: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Horizon forecast plus the residual spread it was banded with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One point per horizon day, in date order
    pub points: Vec<ForecastPoint>,
    /// Standard deviation of in-sample residuals
    pub residual_sigma: f64,
    pub mode: ForecastMode,
}

impl ForecastResult {
    /// Number of forecast days
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Expected values in date order
    pub fn expected(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.expected).collect()
    }

    /// Sum of expected demand over the first `days` points (clamped to the horizon)
    pub fn expected_total(&self, days: usize) -> f64 {
        self.points.iter().take(days).map(|p| p.expected).sum()
    }
}

/// A forecast labelled with the method that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedForecast {
    pub method: ForecastMethod,
    pub forecast: ForecastResult,
}
