//! Residual-based prediction bands
//!
//! Every forecaster bands its point forecast with a constant half-width of
//! `1.96 * residual_sigma`, clamping the lower bound at zero demand.

use chrono::{Duration, NaiveDate};
use demand_spi::{DemandError, ForecastMode, ForecastPoint, ForecastResult, Result};

/// Two-sided 95% normal quantile
pub const Z_95: f64 = 1.96;

/// Lower and upper bound around one expected value
pub fn band(expected: f64, residual_sigma: f64) -> (f64, f64) {
    let half_width = Z_95 * residual_sigma;
    ((expected - half_width).max(0.0), expected + half_width)
}

/// Attach dates and bands to a sequence of expected values
///
/// Point `h` (0-based) is dated `h + 1` days after `last_date`. Negative
/// expectations are clamped to zero before banding. Fails with
/// [`DemandError::InvalidConfig`] when a forecast date falls past the end of
/// the calendar.
pub fn banded_forecast(
    last_date: NaiveDate,
    expected: &[f64],
    residual_sigma: f64,
    mode: ForecastMode,
) -> Result<ForecastResult> {
    let points = expected
        .iter()
        .enumerate()
        .map(|(h, &value)| {
            let expected = value.max(0.0);
            let (lower_bound, upper_bound) = band(expected, residual_sigma);
            Ok(ForecastPoint {
                date: forecast_date(last_date, h + 1)?,
                expected,
                lower_bound,
                upper_bound,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ForecastResult {
        points,
        residual_sigma,
        mode,
    })
}

fn forecast_date(last_date: NaiveDate, steps: usize) -> Result<NaiveDate> {
    i64::try_from(steps)
        .ok()
        .and_then(Duration::try_days)
        .and_then(|offset| last_date.checked_add_signed(offset))
        .ok_or_else(|| {
            DemandError::invalid_config(
                "horizon",
                format!("{steps} days after {last_date} is past the last representable date"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_half_width() {
        let (lower, upper) = band(10.0, 1.0);
        assert_relative_eq!(lower, 8.04, epsilon = 1e-12);
        assert_relative_eq!(upper, 11.96, epsilon = 1e-12);
    }

    #[test]
    fn test_band_clamps_lower_at_zero() {
        let (lower, upper) = band(1.0, 5.0);
        assert_eq!(lower, 0.0);
        assert_relative_eq!(upper, 10.8, epsilon = 1e-12);
    }

    #[test]
    fn test_banded_forecast_dates_and_ordering() {
        let last = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let result = banded_forecast(last, &[3.0, -2.0, 5.0], 0.5, ForecastMode::Full).unwrap();

        assert_eq!(result.horizon(), 3);
        assert_eq!(result.points[0].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(result.points[2].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(result.points[1].expected, 0.0);
        for p in &result.points {
            assert!(0.0 <= p.lower_bound);
            assert!(p.lower_bound <= p.expected);
            assert!(p.expected <= p.upper_bound);
        }
    }

    #[test]
    fn test_banded_forecast_past_calendar_end() {
        let last = NaiveDate::MAX - Duration::days(1);
        let result = banded_forecast(last, &[1.0], 0.0, ForecastMode::Full).unwrap();
        assert_eq!(result.points[0].date, NaiveDate::MAX);

        let err = banded_forecast(last, &[1.0, 1.0], 0.0, ForecastMode::Full).unwrap_err();
        assert!(matches!(err, DemandError::InvalidConfig { ref name, .. } if name == "horizon"));
    }
}
