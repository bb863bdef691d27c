//! Trait for replenishment decisions

use crate::error::Result;
use crate::model::{ReplenishmentInput, ReplenishmentResult};

/// Derives reorder metrics from a demand forecast
pub trait ReplenishmentPlanner: Send + Sync {
    /// Size safety stock, reorder point and order quantity for one SKU
    fn plan(&self, input: &ReplenishmentInput) -> Result<ReplenishmentResult>;
}
