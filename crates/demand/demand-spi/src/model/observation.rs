//! Historical sales observations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fewest valid observations any model in the engine will accept
pub const MIN_OBSERVATIONS: usize = 3;

/// A single ingested sales row that has not been validated yet
///
/// Either field may be missing when the upstream row could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: Option<NaiveDate>,
    pub quantity: Option<f64>,
}

impl RawObservation {
    /// Create a row from already-typed values
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self {
            date: Some(date),
            quantity: Some(quantity),
        }
    }

    /// Parse a row from text fields (`YYYY-MM-DD` date, decimal quantity)
    ///
    /// Unparseable fields become `None`; the normalizer drops such rows.
    pub fn parse(date: &str, quantity: &str) -> Self {
        Self {
            date: NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok(),
            quantity: quantity.trim().parse::<f64>().ok(),
        }
    }

    /// Convert into a [`HistoricalPoint`] when both fields are usable
    ///
    /// Negative quantities are clipped to zero.
    pub fn validated(&self) -> Option<HistoricalPoint> {
        let date = self.date?;
        let quantity = self.quantity.filter(|q| q.is_finite())?;
        Some(HistoricalPoint::new(date, quantity.max(0.0)))
    }
}

impl From<HistoricalPoint> for RawObservation {
    fn from(point: HistoricalPoint) -> Self {
        Self::new(point.date, point.quantity)
    }
}

/// A validated unit-sales observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    /// Units sold, never negative
    pub quantity: f64,
}

impl HistoricalPoint {
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self { date, quantity }
    }
}

/// Date-sorted, validated series ready for modeling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub points: Vec<HistoricalPoint>,
    /// `true` when the series spans at least two full seasonal periods
    pub seasonally_viable: bool,
    /// Number of input rows rejected during validation
    pub dropped: usize,
}

impl NormalizedSeries {
    /// Quantities in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.quantity).collect()
    }

    /// Dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_parse_valid_row() {
        let raw = RawObservation::parse("2024-03-05", " 12.5 ");
        assert_eq!(raw.date, Some(day(5)));
        assert_eq!(raw.quantity, Some(12.5));
    }

    #[test]
    fn test_parse_invalid_fields() {
        let raw = RawObservation::parse("05/03/2024", "twelve");
        assert!(raw.date.is_none());
        assert!(raw.quantity.is_none());
    }

    #[test]
    fn test_validated_rejects_missing_and_non_finite() {
        let missing_date = RawObservation {
            date: None,
            quantity: Some(1.0),
        };
        let nan = RawObservation {
            date: Some(day(1)),
            quantity: Some(f64::NAN),
        };
        let inf = RawObservation {
            date: Some(day(1)),
            quantity: Some(f64::INFINITY),
        };
        assert!(missing_date.validated().is_none());
        assert!(nan.validated().is_none());
        assert!(inf.validated().is_none());
    }

    #[test]
    fn test_validated_clips_negative() {
        let point = RawObservation::new(day(2), -4.0).validated().unwrap();
        assert_eq!(point.quantity, 0.0);
    }

    #[test]
    fn test_normalized_series_accessors() {
        let series = NormalizedSeries {
            points: vec![HistoricalPoint::new(day(1), 3.0), HistoricalPoint::new(day(2), 4.0)],
            seasonally_viable: false,
            dropped: 1,
        };
        assert_eq!(series.values(), vec![3.0, 4.0]);
        assert_eq!(series.dates(), vec![day(1), day(2)]);
        assert_eq!(series.last_date(), Some(day(2)));
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }
}
