//! Error types for strait-core

use strait_stats::StatsError;
use thiserror::Error;

/// Main error type for strait operations
#[derive(Debug, Error)]
pub enum StraitError {
    /// Two fields do not share a grid shape
    #[error("Shape mismatch: {expected:?} vs {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A field was built with the wrong number of coordinate axes
    #[error("Field has {dims} dimensions but {axes} coordinate axes")]
    AxisCount { dims: usize, axes: usize },

    /// A coordinate axis does not line up with its array dimension
    #[error("Axis '{axis}' has {axis_len} values but dimension {dim} has size {dim_len}")]
    AxisMismatch {
        axis: String,
        axis_len: usize,
        dim: usize,
        dim_len: usize,
    },

    /// Statistical computation failed
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// The plotting collaborator rejected a request
    #[error("Plotting failed: {0}")]
    Plot(#[from] PlotError),
}

/// Errors from the plotting collaborator
#[derive(Debug, Error)]
pub enum PlotError {
    /// Contour requests need a 2D grid
    #[error("Contour grid must be two-dimensional, got {ndim} dimensions")]
    NotTwoDimensional { ndim: usize },

    /// Output destination rejected
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// Failure inside the rendering backend
    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Result type alias for strait operations
pub type StraitResult<T> = Result<T, StraitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = StraitError::ShapeMismatch {
            expected: vec![3, 4],
            actual: vec![3, 5],
        };
        assert!(err.to_string().contains("[3, 4]"));
        assert!(err.to_string().contains("[3, 5]"));
    }

    #[test]
    fn test_stats_error_converts() {
        let err: StraitError = StatsError::EmptySample.into();
        assert!(matches!(err, StraitError::Stats(_)));
    }
}
