//! Trait for series validation and ordering

use crate::error::Result;
use crate::model::{NormalizedSeries, RawObservation, SeriesConfig};

/// Turns raw ingested rows into a sorted, validated series
pub trait SeriesNormalizer: Send + Sync {
    /// Drop invalid rows, sort by date and flag seasonal viability
    ///
    /// Fails with `InsufficientData` when fewer than
    /// [`MIN_OBSERVATIONS`](crate::MIN_OBSERVATIONS) valid rows remain.
    fn normalize(&self, rows: &[RawObservation], config: &SeriesConfig)
        -> Result<NormalizedSeries>;
}
