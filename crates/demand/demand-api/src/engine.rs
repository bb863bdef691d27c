//! Per-SKU forecasting and replenishment pipeline.

use demand_core::{
    holdout, AdditiveDecomposer, DailySeriesNormalizer, HoltWintersForecaster,
    MovingAverageForecaster, ReplenishmentCalculator, SeriesCleaner, SimpleExponentialForecaster,
};
use demand_spi::{
    AccuracyMetrics, Decomposer, DecompositionResult, DemandError, Forecaster, ForecastResult,
    HistoricalPoint, NamedForecast, RawObservation, ReplenishmentInput, ReplenishmentPlanner,
    ReplenishmentResult, Result, SeriesConfig, SeriesNormalizer,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;

fn default_safety_buffer_factor() -> f64 {
    ReplenishmentInput::DEFAULT_SAFETY_BUFFER_FACTOR
}

/// Everything the engine needs for one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineRequest {
    /// Sales history in any order; invalid rows are dropped
    pub history: Vec<RawObservation>,
    /// Units on hand
    pub current_stock: f64,
    /// Supplier lead time in days
    pub lead_time_days: u32,
    /// Multiplier on horizon demand when sizing an order
    #[serde(default = "default_safety_buffer_factor")]
    pub safety_buffer_factor: f64,
    /// Series settings for this SKU, overriding the engine's defaults
    #[serde(default)]
    pub series: Option<SeriesConfig>,
}

impl EngineRequest {
    /// Create a request with the default safety buffer factor.
    pub fn new(history: Vec<RawObservation>, current_stock: f64, lead_time_days: u32) -> Self {
        Self {
            history,
            current_stock,
            lead_time_days,
            safety_buffer_factor: default_safety_buffer_factor(),
            series: None,
        }
    }

    /// Create a request from already-validated points.
    pub fn from_points(history: &[HistoricalPoint], current_stock: f64, lead_time_days: u32) -> Self {
        Self::new(
            history.iter().copied().map(RawObservation::from).collect(),
            current_stock,
            lead_time_days,
        )
    }

    pub fn with_safety_buffer_factor(mut self, factor: f64) -> Self {
        self.safety_buffer_factor = factor;
        self
    }

    pub fn with_series(mut self, series: SeriesConfig) -> Self {
        self.series = Some(series);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.lead_time_days == 0 {
            return Err(DemandError::invalid_config(
                "lead_time_days",
                "must be positive",
            ));
        }
        if !self.current_stock.is_finite() || self.current_stock < 0.0 {
            return Err(DemandError::invalid_config(
                "current_stock",
                format!("must be a non-negative number, got {}", self.current_stock),
            ));
        }
        if !self.safety_buffer_factor.is_finite() || self.safety_buffer_factor <= 0.0 {
            return Err(DemandError::invalid_config(
                "safety_buffer_factor",
                format!("must be positive, got {}", self.safety_buffer_factor),
            ));
        }
        Ok(())
    }
}

/// Engine output for one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub forecast: ForecastResult,
    pub decomposition: DecompositionResult,
    pub replenishment: ReplenishmentResult,
    /// Holdout accuracy of the primary forecaster, when enough history exists
    pub accuracy: Option<AccuracyMetrics>,
    /// Baseline forecasts, when enabled
    pub baselines: Vec<NamedForecast>,
    /// Points that reached the models
    pub observations: usize,
    /// Input rows rejected by validation
    pub dropped_rows: usize,
}

/// Stateless per-SKU pipeline: normalize, clean, forecast, decompose, plan.
///
/// Holds only configuration and the stage implementations, so one engine can
/// serve any number of SKUs concurrently.
pub struct DemandEngine {
    config: EngineConfig,
    normalizer: Box<dyn SeriesNormalizer>,
    forecaster: Box<dyn Forecaster>,
    decomposer: Box<dyn Decomposer>,
    planner: Box<dyn ReplenishmentPlanner>,
}

impl std::fmt::Debug for DemandEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemandEngine")
            .field("config", &self.config)
            .field("forecaster", &self.forecaster.method())
            .finish()
    }
}

impl DemandEngine {
    /// Create an engine with the default stage implementations.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: Box::new(DailySeriesNormalizer),
            forecaster: Box::new(HoltWintersForecaster),
            decomposer: Box::new(AdditiveDecomposer),
            planner: Box::new(ReplenishmentCalculator),
        })
    }

    /// Replace the primary forecaster.
    pub fn with_forecaster(mut self, forecaster: Box<dyn Forecaster>) -> Self {
        self.forecaster = forecaster;
        self
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: Box<dyn SeriesNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the decomposer.
    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    /// Replace the replenishment planner.
    pub fn with_planner(mut self, planner: Box<dyn ReplenishmentPlanner>) -> Self {
        self.planner = planner;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline for one SKU.
    ///
    /// Configuration and request inputs are validated before any
    /// computation; the only data-dependent failure is
    /// [`DemandError::InsufficientData`].
    pub fn run(&self, request: &EngineRequest) -> Result<EngineOutput> {
        let series_config = request.series.unwrap_or(self.config.series);
        series_config.validate()?;
        request.validate()?;

        let series = self.normalizer.normalize(&request.history, &series_config)?;
        let series = SeriesCleaner::new(self.config.cleaning).clean(series, &series_config);
        debug!(
            observations = series.len(),
            dropped = series.dropped,
            seasonally_viable = series.seasonally_viable,
            "normalized history"
        );

        let forecast = self.forecaster.forecast(&series, &series_config)?;
        let decomposition = self.decomposer.decompose(&series, &series_config);
        let replenishment = self.planner.plan(&ReplenishmentInput {
            forecast: forecast.clone(),
            lead_time_days: request.lead_time_days,
            current_stock: request.current_stock,
            safety_buffer_factor: request.safety_buffer_factor,
        })?;

        let accuracy = match self.config.holdout_days {
            0 => None,
            days => holdout(&series, &series_config, days),
        };

        let baselines = if self.config.include_baselines {
            let moving_average = MovingAverageForecaster::new(self.config.moving_average_window)?;
            let baselines: [&dyn Forecaster; 2] = [&moving_average, &SimpleExponentialForecaster];
            baselines
                .iter()
                .map(|f| -> Result<NamedForecast> {
                    Ok(NamedForecast {
                        method: f.method(),
                        forecast: f.forecast(&series, &series_config)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(EngineOutput {
            forecast,
            decomposition,
            replenishment,
            accuracy,
            baselines,
            observations: series.len(),
            dropped_rows: series.dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use demand_spi::{ForecastMethod, ForecastMode};

    fn history(values: &[f64]) -> Vec<RawObservation> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &q)| RawObservation::new(start + Duration::days(i as i64), q))
            .collect()
    }

    fn weekly(weeks: usize) -> Vec<f64> {
        (0..weeks * 7)
            .map(|i| 20.0 + [0.0, 2.0, 1.0, 3.0, 0.0, 6.0, 4.0][i % 7])
            .collect()
    }

    #[test]
    fn test_run_produces_all_views() {
        let engine = DemandEngine::new(EngineConfig::default()).unwrap();
        let request = EngineRequest::new(history(&weekly(8)), 100.0, 7);
        let output = engine.run(&request).unwrap();

        assert_eq!(output.forecast.horizon(), 30);
        assert_eq!(output.forecast.mode, ForecastMode::Full);
        assert_eq!(output.decomposition.len(), 56);
        assert_eq!(output.observations, 56);
        assert!(output.accuracy.is_some());
        assert!(output.baselines.is_empty());
    }

    #[test]
    fn test_series_override() {
        let engine = DemandEngine::new(EngineConfig::default()).unwrap();
        let series = SeriesConfig {
            horizon: 5,
            ..Default::default()
        };
        let request = EngineRequest::new(history(&weekly(3)), 10.0, 2).with_series(series);
        let output = engine.run(&request).unwrap();
        assert_eq!(output.forecast.horizon(), 5);
    }

    #[test]
    fn test_baselines_reported() {
        let config = EngineConfig::builder().include_baselines(true).build().unwrap();
        let engine = DemandEngine::new(config).unwrap();
        let output = engine
            .run(&EngineRequest::new(history(&weekly(4)), 50.0, 3))
            .unwrap();

        let methods: Vec<ForecastMethod> = output.baselines.iter().map(|b| b.method).collect();
        assert_eq!(
            methods,
            vec![ForecastMethod::MovingAverage, ForecastMethod::SimpleExponential]
        );
    }

    #[test]
    fn test_invalid_request_rejected_before_normalizing() {
        let engine = DemandEngine::new(EngineConfig::default()).unwrap();

        // Too little history would also fail; the config error must win
        let request = EngineRequest::new(history(&[1.0]), 10.0, 0);
        assert!(matches!(
            engine.run(&request),
            Err(DemandError::InvalidConfig { ref name, .. }) if name == "lead_time_days"
        ));

        let request = EngineRequest::new(history(&[1.0]), 10.0, 3).with_series(SeriesConfig {
            seasonal_period: 0,
            ..Default::default()
        });
        assert!(matches!(
            engine.run(&request),
            Err(DemandError::InvalidConfig { ref name, .. }) if name == "seasonal_period"
        ));
    }

    #[test]
    fn test_insufficient_history() {
        let engine = DemandEngine::new(EngineConfig::default()).unwrap();
        let request = EngineRequest::new(history(&[1.0, 2.0]), 10.0, 3);
        assert_eq!(
            engine.run(&request).unwrap_err(),
            DemandError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.series.beta = 0.0;
        assert!(DemandEngine::new(config).is_err());
    }
}
