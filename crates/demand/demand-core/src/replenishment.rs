//! Replenishment sizing from a demand forecast
//!
//! ```text
//! safety stock   = ceil(lead-time demand * 0.2)
//! reorder point  = ceil(lead-time demand + safety stock)
//! days of stock  = current stock / (daily demand + ε)
//! reorder alert  = days of stock < lead time
//! order quantity = max(0, ceil(total demand * buffer factor - current stock))  if alert
//! ```
//!
//! The fixed 20% safety ratio and the caller's buffer factor are separate
//! knobs: the ratio sizes safety stock, the factor sizes orders. Stock
//! quantities always round up.

use demand_spi::{
    DemandError, ReplenishmentInput, ReplenishmentPlanner, ReplenishmentResult, Result,
};

/// Share of lead-time demand held as safety stock
pub const SAFETY_STOCK_RATIO: f64 = 0.2;

/// Added to daily demand so zero-demand SKUs report a finite days-of-stock
pub const DEMAND_EPSILON: f64 = 1e-9;

/// Reorder calculator using the days-of-stock versus lead-time alert rule
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplenishmentCalculator;

impl ReplenishmentCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ReplenishmentPlanner for ReplenishmentCalculator {
    fn plan(&self, input: &ReplenishmentInput) -> Result<ReplenishmentResult> {
        validate(input)?;

        let forecast = &input.forecast;
        let horizon = forecast.horizon();
        let lead_time = input.lead_time_days as usize;

        let total_predicted_demand = forecast.expected_total(horizon);
        let daily_average_demand = total_predicted_demand / horizon as f64;
        let lead_time_demand = forecast.expected_total(lead_time);

        let safety_stock = round_up_units(lead_time_demand * SAFETY_STOCK_RATIO);
        let reorder_point = round_up_units(lead_time_demand + safety_stock as f64);

        let days_of_stock_remaining =
            input.current_stock / (daily_average_demand + DEMAND_EPSILON);
        let reorder_alert = days_of_stock_remaining < f64::from(input.lead_time_days);

        let recommended_order_quantity = if reorder_alert {
            round_up_units(total_predicted_demand * input.safety_buffer_factor - input.current_stock)
        } else {
            0
        };

        Ok(ReplenishmentResult {
            total_predicted_demand,
            daily_average_demand,
            lead_time_demand,
            safety_stock,
            reorder_point,
            days_of_stock_remaining,
            reorder_alert,
            recommended_order_quantity,
        })
    }
}

/// Ceiling to whole units, never below zero
fn round_up_units(quantity: f64) -> u64 {
    quantity.ceil().max(0.0) as u64
}

fn validate(input: &ReplenishmentInput) -> Result<()> {
    if input.forecast.points.is_empty() {
        return Err(DemandError::invalid_config(
            "forecast",
            "must contain at least one point",
        ));
    }
    if input.lead_time_days == 0 {
        return Err(DemandError::invalid_config(
            "lead_time_days",
            "must be positive",
        ));
    }
    if !input.current_stock.is_finite() || input.current_stock < 0.0 {
        return Err(DemandError::invalid_config(
            "current_stock",
            format!("must be a non-negative number, got {}", input.current_stock),
        ));
    }
    if !input.safety_buffer_factor.is_finite() || input.safety_buffer_factor <= 0.0 {
        return Err(DemandError::invalid_config(
            "safety_buffer_factor",
            format!("must be positive, got {}", input.safety_buffer_factor),
        ));
    }
    Ok(())
}
