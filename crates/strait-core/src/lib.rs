//! strait-core - Paired-scenario comparison of gridded ocean model output
//!
//! Compares two simulation scenarios ("open" vs "closed" gateway) of the
//! same physical field: descriptive statistics per scenario, an anomaly
//! grid, nonparametric two-sample hypothesis tests, and plot requests for
//! an external rendering collaborator.
//!
//! # Key Components
//!
//! - **Field**: gridded measurement with named coordinate axes and a unit
//! - **AnalysisSpec**: per-variable configuration (units, palette, figures)
//! - **ComparisonPipeline**: orchestrates cleaning, statistics, anomaly,
//!   and plotting for one scenario pair
//! - **Plotter**: the external rendering seam; the core never draws or
//!   writes files itself
//! - **ComparisonReport**: structured result, with a text renderer for
//!   console-style output
//!
//! Each pipeline run is independent and synchronous; callers may run
//! distinct field pairs in parallel if they wish.

pub mod analysis;
pub mod error;
pub mod field;
pub mod pipeline;
pub mod plot;
pub mod report;

pub use analysis::*;
pub use error::*;
pub use field::*;
pub use pipeline::*;
pub use plot::*;
pub use report::*;
