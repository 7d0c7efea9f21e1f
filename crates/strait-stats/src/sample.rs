//! Sample extraction and cleaning
//!
//! A [`Sample`] is a flat sequence of finite values derived from gridded
//! model output. Cleaning drops NaN and infinite entries (the missing-value
//! markers of the source data). Element order carries no meaning downstream;
//! consumers either sort or aggregate.

use serde::{Deserialize, Serialize};

/// A cleaned, flattened numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Build a sample by flattening `values` and dropping non-finite entries
    ///
    /// An input consisting entirely of missing values yields an empty
    /// sample; consumers report that as [`StatsError::EmptySample`]
    /// rather than producing NaN statistics.
    ///
    /// [`StatsError::EmptySample`]: crate::error::StatsError::EmptySample
    pub fn clean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().filter(|v| v.is_finite()).collect();
        Self { values }
    }

    /// The cleaned values, in extraction order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of finite values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the sample holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A sorted copy of the values
    pub(crate) fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted
    }
}
