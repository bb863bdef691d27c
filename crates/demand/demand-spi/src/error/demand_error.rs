//! Demand engine error types

use thiserror::Error;

/// Errors that can occur while forecasting demand or sizing replenishment
///
/// Only two conditions are fatal. Everything else (short but usable series,
/// zero variance, zero demand) is handled by numeric fallbacks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemandError {
    /// Too few valid observations to model the series
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Configuration or replenishment input outside its valid domain
    #[error("Invalid config '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },
}

impl DemandError {
    /// Shorthand for an [`DemandError::InvalidConfig`] value
    pub fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether a batch driver may skip this SKU and carry on with the rest
    pub fn is_data_related(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
