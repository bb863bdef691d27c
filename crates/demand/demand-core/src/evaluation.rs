//! Forecast accuracy on held-out history

use demand_spi::{AccuracyMetrics, Forecaster, NormalizedSeries, SeriesConfig, MIN_OBSERVATIONS};
use tracing::debug;

use crate::normalizer::is_seasonally_viable;
use crate::smoother::HoltWintersForecaster;

/// Compare aligned actual and predicted values
///
/// Pairs beyond the shorter slice are ignored. MAPE skips zero actuals and is
/// `None` when no actual is non-zero.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> AccuracyMetrics {
    let pairs: Vec<(f64, f64)> = actual
        .iter()
        .copied()
        .zip(predicted.iter().copied())
        .collect();
    if pairs.is_empty() {
        return AccuracyMetrics {
            mae: 0.0,
            rmse: 0.0,
            mape: None,
            samples: 0,
        };
    }

    let n = pairs.len() as f64;
    let mae = pairs.iter().map(|(a, p)| (a - p).abs()).sum::<f64>() / n;
    let rmse = (pairs.iter().map(|(a, p)| (a - p).powi(2)).sum::<f64>() / n).sqrt();

    let percentage_errors: Vec<f64> = pairs
        .iter()
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, p)| ((a - p) / a).abs())
        .collect();
    let mape = if percentage_errors.is_empty() {
        None
    } else {
        Some(percentage_errors.iter().sum::<f64>() / percentage_errors.len() as f64)
    };

    AccuracyMetrics {
        mae,
        rmse,
        mape,
        samples: pairs.len(),
    }
}

/// Backtest the Holt-Winters forecaster on the tail of the series
///
/// Holds out the last `min(max_days, n / 4)` observations, forecasts them
/// from the rest and scores the result. Returns `None` when nothing can be
/// held out or the remaining history is too short to model.
pub fn holdout(
    series: &NormalizedSeries,
    config: &SeriesConfig,
    max_days: usize,
) -> Option<AccuracyMetrics> {
    let n = series.len();
    let test_days = max_days.min(n / 4);
    if test_days == 0 || n - test_days < MIN_OBSERVATIONS {
        return None;
    }

    let split = n - test_days;
    let train = NormalizedSeries {
        points: series.points[..split].to_vec(),
        seasonally_viable: is_seasonally_viable(split, config),
        dropped: 0,
    };
    let train_config = SeriesConfig {
        horizon: test_days,
        ..*config
    };

    let forecast = HoltWintersForecaster
        .forecast(&train, &train_config)
        .ok()?;
    let actual: Vec<f64> = series.points[split..].iter().map(|p| p.quantity).collect();
    let metrics = evaluate(&actual, &forecast.expected());
    debug!(
        train = split,
        test = test_days,
        mae = metrics.mae,
        rmse = metrics.rmse,
        "holdout evaluation"
    );
    Some(metrics)
}
