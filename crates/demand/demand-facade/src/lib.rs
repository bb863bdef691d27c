//! Demand Facade
//!
//! High-level API for the demand forecasting and replenishment engine.
//! Re-exports all public types from the demand stack for convenient usage.
//!
//! # Example
//!
//! ```rust,ignore
//! use demand_facade::prelude::*;
//!
//! let engine = DemandEngine::new(EngineConfig::default())?;
//! let output = engine.run(&EngineRequest::from_points(&history, 300.0, 7))?;
//! if output.replenishment.reorder_alert {
//!     println!("order {} units", output.replenishment.recommended_order_quantity);
//! }
//! ```

// Re-export everything from API (which includes SPI and core)
pub use demand_api::*;

// Explicit re-exports for documentation
pub use demand_api::prelude;

// Re-export core modules for direct access
pub use demand_core::{
    baseline, cleaning, confidence, decomposition, evaluation, holt_winters, normalizer,
    replenishment, smoother, stats,
};

// Re-export SPI traits
pub use demand_spi::{Decomposer, Forecaster, ReplenishmentPlanner, SeriesNormalizer};
