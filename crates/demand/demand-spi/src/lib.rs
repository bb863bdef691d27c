//! Demand Service Provider Interface
//!
//! Defines the contracts, error type and data model shared by every layer of
//! the demand forecasting and replenishment engine.
//!
//! - [`SeriesNormalizer`]: raw sales rows to a sorted, validated series
//! - [`Forecaster`]: horizon forecast with residual-based bounds
//! - [`Decomposer`]: trend / seasonal / residual view of the observed span
//! - [`ReplenishmentPlanner`]: forecast to reorder decision
//! - [`DemandError`]: standardized error type for all engine operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, Forecaster, ReplenishmentPlanner, SeriesNormalizer};
pub use error::{DemandError, Result};
pub use model::{
    AccuracyMetrics, DecompositionResult, ForecastMethod, ForecastMode, ForecastPoint,
    ForecastResult, HistoricalPoint, NamedForecast, NormalizedSeries, RawObservation,
    ReplenishmentInput, ReplenishmentResult, SeasonalInit, SeriesConfig, MIN_OBSERVATIONS,
};
