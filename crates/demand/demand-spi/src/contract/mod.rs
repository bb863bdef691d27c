//! Contract module containing trait definitions for engine operations

mod decomposer;
mod forecaster;
mod normalizer;
mod planner;

pub use decomposer::Decomposer;
pub use forecaster::Forecaster;
pub use normalizer::SeriesNormalizer;
pub use planner::ReplenishmentPlanner;
