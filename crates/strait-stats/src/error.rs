//! Error types for strait-stats

use thiserror::Error;

/// Errors that can occur during statistical computation
#[derive(Debug, Error)]
pub enum StatsError {
    /// A consumer was handed a zero-length sample, e.g. from a field that
    /// is entirely missing values
    #[error("Sample is empty")]
    EmptySample,

    /// The sample pair cannot support a two-sample comparison
    #[error("Insufficient data for two-sample comparison: {reason}")]
    InsufficientData { reason: String },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::InsufficientData {
            reason: "zero rank variance".to_string(),
        };
        assert!(err.to_string().contains("zero rank variance"));
    }
}
