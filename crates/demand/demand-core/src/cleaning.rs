//! Optional series cleaning
//!
//! Daily gap filling and outlier capping, as done by the upload pipeline
//! before forecasting. Both steps are off unless enabled in
//! [`CleaningConfig`].

use demand_spi::{HistoricalPoint, NormalizedSeries, SeriesConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::normalizer::is_seasonally_viable;
use crate::stats::quantile;

/// Quantities above `Q3 + OUTLIER_IQR_MULTIPLIER * IQR` are capped
pub const OUTLIER_IQR_MULTIPLIER: f64 = 3.0;

/// Longest calendar gap filled with zero-sales days by default
pub const DEFAULT_MAX_GAP_DAYS: u32 = 90;

/// Cleaning steps applied after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Merge same-day rows and insert zero-sales days for calendar gaps
    pub fill_missing_days: bool,
    /// Gaps with more missing days than this are left unfilled and logged
    pub max_gap_days: u32,
    /// Cap extreme quantities at the upper IQR fence
    pub cap_outliers: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            fill_missing_days: false,
            max_gap_days: DEFAULT_MAX_GAP_DAYS,
            cap_outliers: false,
        }
    }
}

impl CleaningConfig {
    pub fn is_noop(&self) -> bool {
        !self.fill_missing_days && !self.cap_outliers
    }
}

/// Applies the configured cleaning steps to a normalized series
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesCleaner {
    config: CleaningConfig,
}

impl SeriesCleaner {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Clean `series`, recomputing seasonal viability for the new length
    pub fn clean(&self, series: NormalizedSeries, config: &SeriesConfig) -> NormalizedSeries {
        if self.config.is_noop() {
            return series;
        }

        let NormalizedSeries {
            mut points,
            dropped,
            ..
        } = series;

        if self.config.fill_missing_days {
            let before = points.len();
            points = fill_missing_days(&points, self.config.max_gap_days);
            debug!(before, after = points.len(), "resampled series to daily frequency");
        }
        if self.config.cap_outliers {
            let capped = cap_outliers(&mut points);
            if capped > 0 {
                debug!(capped, "capped outlier quantities");
            }
        }

        NormalizedSeries {
            seasonally_viable: is_seasonally_viable(points.len(), config),
            points,
            dropped,
        }
    }
}

/// Sum same-day quantities and insert zero-sales days between gaps
///
/// Expects `points` sorted by date. A gap missing more than `max_gap_days`
/// days is usually a mistyped date; it is logged and left unfilled.
pub fn fill_missing_days(points: &[HistoricalPoint], max_gap_days: u32) -> Vec<HistoricalPoint> {
    let mut daily: Vec<HistoricalPoint> = Vec::with_capacity(points.len());
    for point in points {
        match daily.last_mut() {
            Some(last) if last.date == point.date => {
                last.quantity += point.quantity;
                continue;
            }
            _ => {}
        }

        if let Some(last_date) = daily.last().map(|p| p.date) {
            let missing = (point.date - last_date).num_days() - 1;
            if missing > i64::from(max_gap_days) {
                warn!(
                    from = %last_date,
                    to = %point.date,
                    missing_days = missing,
                    max_gap_days,
                    "calendar gap too long to fill"
                );
            } else {
                daily.extend(
                    last_date
                        .iter_days()
                        .skip(1)
                        .take_while(|day| *day < point.date)
                        .map(|day| HistoricalPoint::new(day, 0.0)),
                );
            }
        }
        daily.push(*point);
    }
    daily
}

/// Cap quantities above the upper IQR fence, returning how many were capped
pub fn cap_outliers(points: &mut [HistoricalPoint]) -> usize {
    let mut sorted: Vec<f64> = points.iter().map(|p| p.quantity).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let fence = q3 + OUTLIER_IQR_MULTIPLIER * (q3 - q1);

    let mut capped = 0;
    for point in points.iter_mut().filter(|p| p.quantity > fence) {
        point.quantity = fence;
        capped += 1;
    }
    capped
}
