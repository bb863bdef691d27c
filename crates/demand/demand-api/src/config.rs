//! Engine configuration types.

use demand_core::CleaningConfig;
use demand_spi::{DemandError, Result, SeasonalInit, SeriesConfig};
use serde::{Deserialize, Serialize};

/// Configuration for a [`DemandEngine`](crate::DemandEngine).
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// document such as `{"series": {"horizon": 14}}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seasonal period, horizon and smoothing weights
    pub series: SeriesConfig,
    /// Optional cleaning applied after normalization
    pub cleaning: CleaningConfig,
    /// Upper bound on held-out days for accuracy metrics (0 disables)
    pub holdout_days: usize,
    /// Also report moving-average and simple-exponential forecasts
    pub include_baselines: bool,
    /// Window of the moving-average baseline
    pub moving_average_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            series: SeriesConfig::default(),
            cleaning: CleaningConfig::default(),
            holdout_days: 30,
            include_baselines: false,
            moving_average_window: 7,
        }
    }
}

impl EngineConfig {
    /// Create a builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DemandError::invalid_config("engine_config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DemandError::invalid_config("engine_config", e.to_string()))
    }

    /// Check every field before any computation runs.
    pub fn validate(&self) -> Result<()> {
        self.series.validate()?;
        if self.moving_average_window == 0 {
            return Err(DemandError::invalid_config(
                "moving_average_window",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for EngineConfig.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seasonal period.
    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.config.series.seasonal_period = period;
        self
    }

    /// Set the forecast horizon in days.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.series.horizon = horizon;
        self
    }

    /// Set the level, trend and seasonal smoothing weights.
    pub fn smoothing(mut self, alpha: f64, beta: f64, gamma: f64) -> Self {
        self.config.series.alpha = alpha;
        self.config.series.beta = beta;
        self.config.series.gamma = gamma;
        self
    }

    /// Choose how the starting seasonal indices are estimated.
    pub fn seasonal_init(mut self, init: SeasonalInit) -> Self {
        self.config.series.seasonal_init = init;
        self
    }

    /// Replace the whole series configuration.
    pub fn series(mut self, series: SeriesConfig) -> Self {
        self.config.series = series;
        self
    }

    /// Enable or disable daily gap filling.
    pub fn fill_missing_days(mut self, enabled: bool) -> Self {
        self.config.cleaning.fill_missing_days = enabled;
        self
    }

    /// Set the longest calendar gap that gap filling will fill.
    pub fn max_gap_days(mut self, days: u32) -> Self {
        self.config.cleaning.max_gap_days = days;
        self
    }

    /// Enable or disable outlier capping.
    pub fn cap_outliers(mut self, enabled: bool) -> Self {
        self.config.cleaning.cap_outliers = enabled;
        self
    }

    /// Set the maximum number of held-out days.
    pub fn holdout_days(mut self, days: usize) -> Self {
        self.config.holdout_days = days;
        self
    }

    /// Report baseline forecasts alongside the primary one.
    pub fn include_baselines(mut self, enabled: bool) -> Self {
        self.config.include_baselines = enabled;
        self
    }

    /// Set the moving-average baseline window.
    pub fn moving_average_window(mut self, window: usize) -> Self {
        self.config.moving_average_window = window;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
