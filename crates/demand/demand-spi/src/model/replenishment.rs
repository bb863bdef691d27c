//! Replenishment sizing models

use serde::{Deserialize, Serialize};

use super::ForecastResult;

/// Inputs to the reorder decision for one SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentInput {
    pub forecast: ForecastResult,
    /// Days between placing an order and receiving it
    pub lead_time_days: u32,
    /// Units on hand, supplied by the inventory system
    pub current_stock: f64,
    /// Multiplier applied to horizon demand when sizing an order
    pub safety_buffer_factor: f64,
}

impl ReplenishmentInput {
    /// Default multiplier for order sizing
    pub const DEFAULT_SAFETY_BUFFER_FACTOR: f64 = 1.2;

    /// Create an input with the default safety buffer factor
    pub fn new(forecast: ForecastResult, lead_time_days: u32, current_stock: f64) -> Self {
        Self {
            forecast,
            lead_time_days,
            current_stock,
            safety_buffer_factor: Self::DEFAULT_SAFETY_BUFFER_FACTOR,
        }
    }

    pub fn with_safety_buffer_factor(mut self, factor: f64) -> Self {
        self.safety_buffer_factor = factor;
        self
    }
}

/// Reorder recommendation derived from a forecast
///
/// Stock-unit quantities are whole units, always rounded up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentResult {
    pub total_predicted_demand: f64,
    pub daily_average_demand: f64,
    pub lead_time_demand: f64,
    pub safety_stock: u64,
    pub reorder_point: u64,
    pub days_of_stock_remaining: f64,
    pub reorder_alert: bool,
    pub recommended_order_quantity: u64,
}
