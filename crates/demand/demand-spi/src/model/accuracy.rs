//! Forecast accuracy metrics

use serde::{Deserialize, Serialize};

/// Error measures of a forecast against held-out actuals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute percentage error as a fraction; `None` when every actual is zero
    pub mape: Option<f64>,
    /// Number of compared pairs
    pub samples: usize,
}
