//! Demand Core
//!
//! Core implementations for the demand engine: series normalization and
//! cleaning, additive Holt-Winters smoothing with a mean/variance fallback,
//! baseline forecasters, decomposition, replenishment sizing and accuracy
//! evaluation.

pub mod baseline;
pub mod cleaning;
pub mod confidence;
pub mod decomposition;
pub mod evaluation;
pub mod holt_winters;
pub mod normalizer;
pub mod replenishment;
pub mod smoother;
pub mod stats;

// Re-export SPI items for implementations
pub use demand_spi::{
    AccuracyMetrics, Decomposer, DecompositionResult, DemandError, ForecastMethod, ForecastMode,
    ForecastPoint, ForecastResult, Forecaster, HistoricalPoint, NamedForecast, NormalizedSeries,
    RawObservation, ReplenishmentInput, ReplenishmentPlanner, ReplenishmentResult, Result,
    SeasonalInit, SeriesConfig, SeriesNormalizer, MIN_OBSERVATIONS,
};

// Re-export main types
pub use baseline::{MovingAverageForecaster, SimpleExponentialForecaster};
pub use cleaning::{CleaningConfig, SeriesCleaner};
pub use decomposition::AdditiveDecomposer;
pub use evaluation::{evaluate, holdout};
pub use holt_winters::HoltWintersFit;
pub use normalizer::DailySeriesNormalizer;
pub use replenishment::ReplenishmentCalculator;
pub use smoother::HoltWintersForecaster;
