//! Series validation and ordering

use demand_spi::{
    DemandError, HistoricalPoint, NormalizedSeries, RawObservation, Result, SeriesConfig,
    SeriesNormalizer, MIN_OBSERVATIONS,
};
use tracing::debug;

/// Normalizer for daily unit-sales rows
///
/// Drops rows without a date or a finite quantity, clips negative sales to
/// zero and sorts by date. Duplicate dates are kept as separate points in
/// their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailySeriesNormalizer;

impl DailySeriesNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesNormalizer for DailySeriesNormalizer {
    fn normalize(
        &self,
        rows: &[RawObservation],
        config: &SeriesConfig,
    ) -> Result<NormalizedSeries> {
        if config.seasonal_period == 0 {
            return Err(DemandError::invalid_config(
                "seasonal_period",
                "must be positive",
            ));
        }

        let mut points: Vec<HistoricalPoint> = rows.iter().filter_map(|r| r.validated()).collect();
        let dropped = rows.len() - points.len();
        if dropped > 0 {
            debug!(dropped, kept = points.len(), "dropped invalid observations");
        }

        if points.len() < MIN_OBSERVATIONS {
            return Err(DemandError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: points.len(),
            });
        }

        // Stable: rows sharing a date keep their relative order
        points.sort_by_key(|p| p.date);

        Ok(NormalizedSeries {
            seasonally_viable: is_seasonally_viable(points.len(), config),
            points,
            dropped,
        })
    }
}

/// Whether a series of `len` points supports full seasonal modeling
pub fn is_seasonally_viable(len: usize, config: &SeriesConfig) -> bool {
    config.seasonal_period > 0 && len >= config.seasonal_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn rows(values: &[(u32, f64)]) -> Vec<RawObservation> {
        values
            .iter()
            .map(|&(d, q)| RawObservation::new(day(d), q))
            .collect()
    }

    #[test]
    fn test_sorts_by_date() {
        let input = rows(&[(3, 30.0), (1, 10.0), (2, 20.0)]);
        let series = DailySeriesNormalizer
            .normalize(&input, &SeriesConfig::default())
            .unwrap();
        assert_eq!(series.values(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.dropped, 0);
    }

    #[test]
    fn test_drops_invalid_rows() {
        let mut input = rows(&[(1, 1.0), (2, 2.0), (3, 3.0)]);
        input.push(RawObservation::parse("not-a-date", "4"));
        input.push(RawObservation::parse("2024-05-05", "n/a"));
        input.push(RawObservation {
            date: Some(day(6)),
            quantity: Some(f64::NAN),
        });

        let series = DailySeriesNormalizer
            .normalize(&input, &SeriesConfig::default())
            .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.dropped, 3);
    }

    #[test]
    fn test_duplicate_dates_are_not_merged() {
        let input = rows(&[(2, 5.0), (1, 1.0), (2, 7.0)]);
        let series = DailySeriesNormalizer
            .normalize(&input, &SeriesConfig::default())
            .unwrap();
        assert_eq!(series.values(), vec![1.0, 5.0, 7.0]);
    }

    #[test]
    fn test_insufficient_after_dropping() {
        let mut input = rows(&[(1, 1.0), (2, 2.0)]);
        input.push(RawObservation::parse("", "3"));
        let err = DailySeriesNormalizer
            .normalize(&input, &SeriesConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            DemandError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_viability_boundary() {
        let config = SeriesConfig {
            seasonal_period: 3,
            ..Default::default()
        };
        let five = rows(&[(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0), (5, 1.0)]);
        let six = rows(&[(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0), (5, 1.0), (6, 1.0)]);

        assert!(!DailySeriesNormalizer.normalize(&five, &config).unwrap().seasonally_viable);
        assert!(DailySeriesNormalizer.normalize(&six, &config).unwrap().seasonally_viable);
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = SeriesConfig {
            seasonal_period: 0,
            ..Default::default()
        };
        let input = rows(&[(1, 1.0), (2, 2.0), (3, 3.0)]);
        assert!(matches!(
            DailySeriesNormalizer.normalize(&input, &config),
            Err(DemandError::InvalidConfig { .. })
        ));
    }
}
