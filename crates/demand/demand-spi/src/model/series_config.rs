//! Per-invocation series configuration

use serde::{Deserialize, Serialize};

use crate::error::{DemandError, Result};

/// How the starting seasonal indices are estimated from the first cycles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalInit {
    /// Average ratio of each phase to its cycle's mean (a zero mean divides by 1)
    #[default]
    Ratio,
    /// Average deviation of each phase from its cycle's mean
    ///
    /// Starts a constant series exactly at its fixed point.
    Additive,
}

/// Seasonal period, horizon and smoothing weights for one forecasting run
///
/// Passed explicitly with every call; there is no global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Length of one seasonal cycle in observations (7 for day-of-week)
    pub seasonal_period: usize,
    /// Number of future days to forecast
    pub horizon: usize,
    /// Level smoothing weight
    pub alpha: f64,
    /// Trend smoothing weight
    pub beta: f64,
    /// Seasonal smoothing weight
    pub gamma: f64,
    /// Starting seasonal index estimate
    pub seasonal_init: SeasonalInit,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            seasonal_period: 7,
            horizon: 30,
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.2,
            seasonal_init: SeasonalInit::Ratio,
        }
    }
}

impl SeriesConfig {
    /// Minimum series length for seasonal (full Holt-Winters) modeling
    pub fn seasonal_threshold(&self) -> usize {
        2 * self.seasonal_period
    }

    /// Reject non-positive period/horizon and weights outside (0, 1)
    pub fn validate(&self) -> Result<()> {
        if self.seasonal_period == 0 {
            return Err(DemandError::invalid_config(
                "seasonal_period",
                "must be positive",
            ));
        }
        if self.horizon == 0 {
            return Err(DemandError::invalid_config("horizon", "must be positive"));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() || value <= 0.0 || value >= 1.0 {
                return Err(DemandError::invalid_config(
                    name,
                    format!("must be in (0, 1), got {value}"),
                ));
            }
        }
        Ok(())
    }
}
