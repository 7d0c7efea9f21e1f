//! strait-stats - Statistical primitives for scenario comparison
//!
//! This crate provides the statistical core shared by all strait analyses:
//!
//! - **Sample**: flattening and missing-value removal for gridded output
//! - **ECDF**: Empirical Cumulative Distribution Function
//! - **Summary**: descriptive statistics (mean, median, min, max)
//! - **Hypothesis**: two-sample rank-sum and distribution-equality tests
//!
//! # Design Philosophy
//!
//! Everything here is a pure, bounded-time function over in-memory data.
//! Empty or degenerate inputs surface as [`StatsError`] values rather than
//! NaN statistics, so callers can decide whether to skip a field or abort.

pub mod ecdf;
pub mod error;
pub mod hypothesis;
pub mod sample;
pub mod summary;

pub use ecdf::*;
pub use error::*;
pub use hypothesis::*;
pub use sample::*;
pub use summary::*;
