//! Basic example: forecast and size replenishment for a handful of SKUs
//!
//! Run with: RUST_LOG=debug cargo run --example basic -p demand-facade

use chrono::{Duration, NaiveDate};
use demand_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn weekly_history(base: f64, weeks: usize) -> Vec<HistoricalPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let weekday_effect = [0.0, 2.0, 1.0, 3.0, 0.0, 6.0, 4.0];
    (0..weeks * 7)
        .map(|i| {
            let growth = i as f64 * 0.1;
            HistoricalPoint::new(
                start + Duration::days(i as i64),
                base + growth + weekday_effect[i % 7],
            )
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== stockcast Basic Examples ===\n");

    // 1. Single SKU
    let engine = DemandEngine::new(EngineConfig::builder().horizon(14).build()?)?;
    let history = weekly_history(40.0, 8);
    let output = engine.run(&EngineRequest::from_points(&history, 120.0, 5))?;

    println!("1. Forecast ({:?} mode, sigma {:.2})", output.forecast.mode, output.forecast.residual_sigma);
    for p in output.forecast.points.iter().take(7) {
        println!(
            "   {}  {:>7.2}  [{:>7.2}, {:>7.2}]",
            p.date, p.expected, p.lower_bound, p.upper_bound
        );
    }

    let r = &output.replenishment;
    println!("\n2. Replenishment");
    println!("   Total demand:      {:.1}", r.total_predicted_demand);
    println!("   Lead-time demand:  {:.1}", r.lead_time_demand);
    println!("   Safety stock:      {}", r.safety_stock);
    println!("   Reorder point:     {}", r.reorder_point);
    println!("   Days of stock:     {:.1}", r.days_of_stock_remaining);
    println!("   Reorder alert:     {}", r.reorder_alert);
    println!("   Order quantity:    {}", r.recommended_order_quantity);

    if let Some(acc) = output.accuracy {
        println!("\n3. Holdout accuracy: MAE {:.2}, RMSE {:.2}", acc.mae, acc.rmse);
    }

    // 4. Batch
    let jobs = vec![
        SkuJob::new("ITEM-001", EngineRequest::from_points(&weekly_history(40.0, 8), 120.0, 5)),
        SkuJob::new("ITEM-002", EngineRequest::from_points(&weekly_history(5.0, 6), 900.0, 5)),
        SkuJob::new("ITEM-003", EngineRequest::from_points(&weekly_history(5.0, 0), 10.0, 5)),
    ];
    let report = BatchRunner::new(engine).run(&jobs);
    println!("\n4. Batch: {} completed, {} failed", report.completed.len(), report.failures.len());
    println!("   Low stock: {:?}", report.low_stock_skus);
    for failure in &report.failures {
        println!("   {}: {}", failure.sku, failure.reason);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
