//! Model module containing data structures

mod accuracy;
mod decomposition_result;
mod forecast;
mod observation;
mod replenishment;
mod series_config;

pub use accuracy::AccuracyMetrics;
pub use decomposition_result::DecompositionResult;
pub use forecast::{ForecastMethod, ForecastMode, ForecastPoint, ForecastResult, NamedForecast};
pub use observation::{HistoricalPoint, NormalizedSeries, RawObservation, MIN_OBSERVATIONS};
pub use replenishment::{ReplenishmentInput, ReplenishmentResult};
pub use series_config::{SeasonalInit, SeriesConfig};
