//! Demand Consumer API
//!
//! Consumer configuration and entry points for the demand engine.
//!
//! This crate provides:
//! - [`EngineConfig`] and its builder
//! - [`DemandEngine`], the per-SKU pipeline
//! - [`BatchRunner`], parallel runs over many SKUs
//! - Re-exports from SPI and core for convenience

pub mod batch;
pub mod config;
pub mod engine;

pub use batch::{BatchReport, BatchRunner, SkuFailure, SkuForecast, SkuJob};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{DemandEngine, EngineOutput, EngineRequest};

// Re-export from core
pub use demand_core::{
    baseline, cleaning, confidence, decomposition, evaluation, holt_winters, normalizer,
    replenishment, smoother, stats, AdditiveDecomposer, CleaningConfig, DailySeriesNormalizer,
    HoltWintersFit, HoltWintersForecaster, MovingAverageForecaster, ReplenishmentCalculator,
    SeriesCleaner, SimpleExponentialForecaster,
};

// Re-export traits and models from SPI
pub use demand_spi::{
    AccuracyMetrics, Decomposer, DecompositionResult, DemandError, ForecastMethod, ForecastMode,
    ForecastPoint, ForecastResult, Forecaster, HistoricalPoint, NamedForecast, NormalizedSeries,
    RawObservation, ReplenishmentInput, ReplenishmentPlanner, ReplenishmentResult, Result,
    SeasonalInit, SeriesConfig, SeriesNormalizer, MIN_OBSERVATIONS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BatchReport, BatchRunner, DemandEngine, EngineConfig, EngineOutput, EngineRequest, SkuJob,
    };
    pub use demand_core::{
        AdditiveDecomposer, DailySeriesNormalizer, HoltWintersForecaster, ReplenishmentCalculator,
    };
    pub use demand_spi::{
        Decomposer, DemandError, ForecastResult, Forecaster, HistoricalPoint, RawObservation,
        ReplenishmentInput, ReplenishmentPlanner, ReplenishmentResult, Result, SeasonalInit,
        SeriesConfig, SeriesNormalizer,
    };
}
