//! Parallel multi-SKU runs.
//!
//! Each SKU is an independent engine invocation, so jobs are fanned out over
//! the rayon pool with no shared mutable state. A failed SKU is reported and
//! skipped; it never aborts the batch, and it is never retried.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{DemandEngine, EngineOutput, EngineRequest};

/// One SKU's work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuJob {
    pub sku: String,
    pub request: EngineRequest,
}

impl SkuJob {
    pub fn new(sku: impl Into<String>, request: EngineRequest) -> Self {
        Self {
            sku: sku.into(),
            request,
        }
    }
}

/// Successful SKU run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuForecast {
    pub sku: String,
    pub output: EngineOutput,
}

/// SKU that produced no forecast, with the reason surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuFailure {
    pub sku: String,
    pub reason: String,
    /// `true` for insufficient history, `false` for invalid configuration
    pub insufficient_data: bool,
}

/// Outcome of a batch run, in job order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub completed: Vec<SkuForecast>,
    pub failures: Vec<SkuFailure>,
    /// SKUs whose reorder alert is active
    pub low_stock_skus: Vec<String>,
}

impl BatchReport {
    pub fn low_stock_count(&self) -> usize {
        self.low_stock_skus.len()
    }

    /// Look up a completed SKU.
    pub fn get(&self, sku: &str) -> Option<&EngineOutput> {
        self.completed
            .iter()
            .find(|c| c.sku == sku)
            .map(|c| &c.output)
    }
}

/// Runs many SKUs through one shared engine.
#[derive(Debug)]
pub struct BatchRunner {
    engine: DemandEngine,
}

impl BatchRunner {
    pub fn new(engine: DemandEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &DemandEngine {
        &self.engine
    }

    /// Run every job in parallel and collect the results in input order.
    pub fn run(&self, jobs: &[SkuJob]) -> BatchReport {
        let outcomes: Vec<_> = jobs
            .par_iter()
            .map(|job| (job, self.engine.run(&job.request)))
            .collect();

        let mut report = BatchReport::default();
        for (job, outcome) in outcomes {
            match outcome {
                Ok(output) => {
                    if output.replenishment.reorder_alert {
                        report.low_stock_skus.push(job.sku.clone());
                    }
                    report.completed.push(SkuForecast {
                        sku: job.sku.clone(),
                        output,
                    });
                }
                Err(err) => {
                    warn!(sku = %job.sku, error = %err, "no forecast available");
                    report.failures.push(SkuFailure {
                        sku: job.sku.clone(),
                        reason: err.to_string(),
                        insufficient_data: err.is_data_related(),
                    });
                }
            }
        }

        info!(
            jobs = jobs.len(),
            completed = report.completed.len(),
            failed = report.failures.len(),
            low_stock = report.low_stock_count(),
            "batch forecast complete"
        );
        report
    }
}
