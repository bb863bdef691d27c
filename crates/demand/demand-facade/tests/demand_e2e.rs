//! End-to-end tests for batch runs and serialized documents

use chrono::{Duration, NaiveDate};
use demand_facade::prelude::*;
use demand_facade::{ForecastPoint, ForecastMode};

fn history(values: &[f64]) -> Vec<RawObservation> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &q)| RawObservation::new(start + Duration::days(i as i64), q))
        .collect()
}

fn sku_history(base: f64, days: usize) -> Vec<RawObservation> {
    let values: Vec<f64> = (0..days)
        .map(|i| base + (i % 7) as f64 * base / 10.0)
        .collect();
    history(&values)
}

fn jobs() -> Vec<SkuJob> {
    vec![
        SkuJob::new("SKU-A", EngineRequest::new(sku_history(20.0, 35), 30.0, 7)),
        SkuJob::new("SKU-B", EngineRequest::new(sku_history(5.0, 60), 5000.0, 7)),
        SkuJob::new("SKU-C", EngineRequest::new(history(&[1.0]), 10.0, 7)),
        SkuJob::new("SKU-D", EngineRequest::new(sku_history(8.0, 10), 2.0, 14)),
    ]
}

// ============================================================================
// Batch Tests
// ============================================================================

#[test]
fn test_batch_isolates_failures() {
    let runner = BatchRunner::new(DemandEngine::new(EngineConfig::default()).unwrap());
    let report = runner.run(&jobs());

    let completed: Vec<_> = report.completed.iter().map(|c| c.sku.as_str()).collect();
    assert_eq!(completed, vec!["SKU-A", "SKU-B", "SKU-D"]);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].sku, "SKU-C");
    assert!(report.failures[0].insufficient_data);
    assert!(report.failures[0].reason.contains("Insufficient data"));

    assert_eq!(report.low_stock_skus, vec!["SKU-A", "SKU-D"]);
    assert_eq!(report.low_stock_count(), 2);
    assert_eq!(
        report.get("SKU-D").unwrap().forecast.mode,
        ForecastMode::Fallback
    );
}

#[test]
fn test_batch_matches_sequential_runs() {
    let engine = DemandEngine::new(EngineConfig::default()).unwrap();
    let jobs = jobs();
    let sequential: Vec<_> = jobs.iter().map(|j| engine.run(&j.request).ok()).collect();

    let report = BatchRunner::new(engine).run(&jobs);
    for (job, expected) in jobs.iter().zip(sequential) {
        assert_eq!(report.get(&job.sku).cloned(), expected, "{}", job.sku);
    }
}

#[test]
fn test_batch_is_deterministic() {
    let runner = BatchRunner::new(DemandEngine::new(EngineConfig::default()).unwrap());
    let first = runner.run(&jobs());
    let second = runner.run(&jobs());
    assert_eq!(first, second);
}

#[test]
fn test_empty_batch() {
    let runner = BatchRunner::new(DemandEngine::new(EngineConfig::default()).unwrap());
    let report = runner.run(&[]);
    assert!(report.completed.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(report.low_stock_count(), 0);
}

// ============================================================================
// Replenishment Scenario
// ============================================================================

struct FlatForecaster(f64);

impl Forecaster for FlatForecaster {
    fn method(&self) -> demand_facade::ForecastMethod {
        demand_facade::ForecastMethod::MovingAverage
    }

    fn forecast(
        &self,
        series: &demand_facade::NormalizedSeries,
        config: &SeriesConfig,
    ) -> Result<ForecastResult> {
        let last = series.last_date().unwrap();
        Ok(ForecastResult {
            points: (1..=config.horizon)
                .map(|h| ForecastPoint {
                    date: last + Duration::days(h as i64),
                    expected: self.0,
                    lower_bound: self.0,
                    upper_bound: self.0,
                })
                .collect(),
            residual_sigma: 0.0,
            mode: ForecastMode::Full,
        })
    }
}

#[test]
fn test_replenishment_scenario_through_engine() {
    let engine = DemandEngine::new(EngineConfig::default())
        .unwrap()
        .with_forecaster(Box::new(FlatForecaster(100.0)));
    let output = engine
        .run(&EngineRequest::new(sku_history(100.0, 21), 300.0, 7))
        .unwrap();

    let plan = &output.replenishment;
    assert_eq!(plan.safety_stock, 140);
    assert_eq!(plan.reorder_point, 840);
    assert!(plan.reorder_alert);
    assert_eq!(plan.recommended_order_quantity, 3300);
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_output_json_round_trip() {
    let config = EngineConfig::builder().include_baselines(true).build().unwrap();
    let engine = DemandEngine::new(config).unwrap();
    let output = engine
        .run(&EngineRequest::new(sku_history(12.0, 28), 50.0, 5))
        .unwrap();

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"reorder_alert\""));
    assert!(json.contains("\"mode\":\"full\""));

    let parsed: EngineOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.forecast.points.len(), output.forecast.points.len());
    assert_eq!(parsed.forecast.mode, output.forecast.mode);
    assert_eq!(
        parsed.replenishment.recommended_order_quantity,
        output.replenishment.recommended_order_quantity
    );
    assert_eq!(parsed.replenishment.reorder_alert, output.replenishment.reorder_alert);
    assert_eq!(parsed.baselines.len(), 2);
    assert_eq!(parsed.forecast.points[0].date, output.forecast.points[0].date);
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "history": [
            {"date": "2024-01-01", "quantity": 4.0},
            {"date": "2024-01-02", "quantity": 6.0},
            {"date": null, "quantity": 9.0},
            {"date": "2024-01-03", "quantity": 5.0}
        ],
        "current_stock": 12.0,
        "lead_time_days": 2
    }"#;
    let request: EngineRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.safety_buffer_factor, 1.2);
    assert!(request.series.is_none());

    let engine = DemandEngine::new(EngineConfig::default()).unwrap();
    let output = engine.run(&request).unwrap();
    assert_eq!(output.observations, 3);
    assert_eq!(output.dropped_rows, 1);
    assert_eq!(output.forecast.mode, ForecastMode::Fallback);
}

#[test]
fn test_config_from_partial_json() {
    let config = EngineConfig::from_json(r#"{"series": {"horizon": 14}, "holdout_days": 7}"#)
        .unwrap();
    assert_eq!(config.series.horizon, 14);
    assert_eq!(config.series.seasonal_period, 7);
    assert_eq!(config.holdout_days, 7);

    let restored = EngineConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(restored, config);

    assert!(EngineConfig::from_json(r#"{"series": {"horizon": 0}}"#).is_err());
}
