//! Plotting collaborator interface
//!
//! The pipeline prepares fully-specified requests and hands them to a
//! [`Plotter`]; rendering and file output happen entirely on the other side
//! of the trait. Style travels as an explicit value with every call rather
//! than as process-wide state.

use std::path::PathBuf;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Color palette identifier understood by the rendering backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    /// Diverging, for signed anomaly-like quantities (streamfunction)
    Balance,
    /// Sequential green, surface density maps
    Algae,
    /// Sequential blue-green, vertical density sections
    Haline,
    /// Sequential, ventilation age sections
    Dense,
}

impl Colormap {
    /// Backend palette name
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Balance => "balance",
            Colormap::Algae => "algae",
            Colormap::Haline => "haline",
            Colormap::Dense => "dense",
        }
    }
}

/// Style applied to a single plotting call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Output resolution
    pub dpi: u32,
    /// Axis and colorbar label size
    pub label_size: f32,
    /// Width of overlaid contour lines
    pub contour_line_width: f32,
    /// Hex RGB fill drawn behind the grid (land mask)
    pub background_fill: String,
}

impl PlotStyle {
    pub fn with_background_fill(mut self, fill: impl Into<String>) -> Self {
        self.background_fill = fill.into();
        self
    }

    pub fn with_contour_line_width(mut self, width: f32) -> Self {
        self.contour_line_width = width;
        self
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            dpi: 600,
            label_size: 16.0,
            contour_line_width: 0.5,
            background_fill: "#695447".to_string(),
        }
    }
}

/// Contour map request for one 2D field
///
/// `x` labels the grid columns, `y` the rows.
#[derive(Clone, Debug)]
pub struct ContourRequest {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub grid: Array2<f64>,
    /// Scenario label ("Open", "Closed", "Anomaly")
    pub label: String,
    /// Colorbar quantity label, e.g. "psi (Sv)"
    pub quantity: String,
    pub x_label: String,
    pub y_label: String,
    pub colormap: Colormap,
    /// Depth axes grow downward
    pub invert_y: bool,
    pub output: PathBuf,
}

/// Kind of distribution-comparison chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionKind {
    /// Overlaid kernel density estimates
    Kde,
    /// Side-by-side box plots
    BoxPlot,
    /// Overlaid empirical CDF step curves
    EcdfCurves,
}

/// One labeled series in a distribution chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Distribution-comparison request over labeled series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionRequest {
    pub kind: DistributionKind,
    pub series: Vec<LabeledSeries>,
    /// Value-axis quantity label, e.g. "psi (Sv)"
    pub quantity: String,
    pub output: PathBuf,
}

/// Rendering collaborator
///
/// Implementations write image artifacts to the requested paths. The
/// pipeline treats calls as fire-and-forget: a failure is recorded as a
/// report warning and never aborts the statistical branch.
pub trait Plotter {
    fn contour(&mut self, request: &ContourRequest, style: &PlotStyle) -> Result<(), PlotError>;

    fn distribution(
        &mut self,
        request: &DistributionRequest,
        style: &PlotStyle,
    ) -> Result<(), PlotError>;
}

/// Plotter that records requests without rendering
///
/// Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingPlotter {
    pub contours: Vec<ContourRequest>,
    pub distributions: Vec<DistributionRequest>,
}

impl Plotter for RecordingPlotter {
    fn contour(&mut self, request: &ContourRequest, _style: &PlotStyle) -> Result<(), PlotError> {
        self.contours.push(request.clone());
        Ok(())
    }

    fn distribution(
        &mut self,
        request: &DistributionRequest,
        _style: &PlotStyle,
    ) -> Result<(), PlotError> {
        self.distributions.push(request.clone());
        Ok(())
    }
}
