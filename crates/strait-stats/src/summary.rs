//! Descriptive summary statistics
//!
//! The per-scenario summary reported alongside the hypothesis tests:
//! mean, median, min, max. No trimming, no robust estimators.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::sample::Sample;

/// Descriptive statistics for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median; averages the two middle values for even counts
    pub median: f64,
}

impl SummaryStats {
    /// Compute summary statistics for a sample
    ///
    /// Pure function: the same sample always yields the same summary.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] for a zero-length sample.
    pub fn from_sample(sample: &Sample) -> StatsResult<Self> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let sorted = sample.sorted();
        let count = sorted.len();

        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Ok(Self {
            count,
            min,
            max,
            mean,
            median,
        })
    }

    /// The range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
