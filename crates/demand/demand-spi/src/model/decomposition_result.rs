//! Decomposition result model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Additive decomposition of an observed series
///
/// All five vectors share one length and index; for every `t`,
/// `observed[t] == trend[t] + seasonal[t] + residual[t]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub dates: Vec<NaiveDate>,
    pub observed: Vec<f64>,
    /// Smoothed level plus slope at each step
    pub trend: Vec<f64>,
    /// Seasonal index of the step's phase
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Largest absolute error of `trend + seasonal + residual` against `observed`
    pub fn reconstruction_error(&self) -> f64 {
        self.observed
            .iter()
            .zip(&self.trend)
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|(((o, t), s), r)| (o - (t + s + r)).abs())
            .fold(0.0, f64::max)
    }
}
