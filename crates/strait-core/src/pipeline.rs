//! Scenario comparison pipeline
//!
//! One [`ComparisonPipeline`] run takes the same field from two scenarios
//! and produces: per-scenario descriptive statistics, ECDF curves, the
//! two-sample hypothesis tests, an anomaly grid, and plot requests for the
//! rendering collaborator.
//!
//! The anomaly and plotting branches are isolated from the statistical
//! branch: a shape mismatch or a backend failure becomes a report warning,
//! never an abort. An empty sample, by contrast, is surfaced as an error
//! because nothing downstream can run without data.

use std::path::PathBuf;

use ndarray::Ix2;
use serde::{Deserialize, Serialize};
use strait_stats::{Ecdf, Sample, SummaryStats, TwoSampleComparison};

use crate::analysis::AnalysisSpec;
use crate::error::StraitResult;
use crate::field::Field;
use crate::plot::{
    ContourRequest, DistributionKind, DistributionRequest, LabeledSeries, PlotStyle, Plotter,
};

/// Structured output of one scenario comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub label_a: String,
    pub label_b: String,
    pub summary_a: SummaryStats,
    pub summary_b: SummaryStats,
    pub curve_a: Ecdf,
    pub curve_b: Ecdf,
    pub comparison: TwoSampleComparison,
    /// Non-fatal failures from the anomaly and plotting branches
    pub warnings: Vec<String>,
}

/// Orchestrates cleaning, statistics, anomaly, and plot requests
pub struct ComparisonPipeline {
    spec: AnalysisSpec,
    style: PlotStyle,
    output_dir: PathBuf,
}

impl ComparisonPipeline {
    pub fn new(spec: AnalysisSpec) -> Self {
        Self {
            spec,
            style: PlotStyle::default(),
            output_dir: PathBuf::from("figs"),
        }
    }

    /// Replace the default plot style
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Directory the figure paths are rooted at (default `figs`)
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn spec(&self) -> &AnalysisSpec {
        &self.spec
    }

    /// Compare two scenarios of the same field
    ///
    /// Order: clean both fields, summarize, build ECDF curves, run both
    /// hypothesis tests, compute the anomaly, emit plot requests, assemble
    /// the report.
    ///
    /// # Errors
    ///
    /// Statistical errors (empty sample, degenerate pair) are surfaced;
    /// anomaly and plotting failures land in `warnings` instead.
    pub fn run(
        &self,
        field_a: &Field,
        field_b: &Field,
        label_a: &str,
        label_b: &str,
        plotter: &mut dyn Plotter,
    ) -> StraitResult<ComparisonReport> {
        let sample_a = field_a.sample();
        let sample_b = field_b.sample();

        let summary_a = SummaryStats::from_sample(&sample_a)?;
        let summary_b = SummaryStats::from_sample(&sample_b)?;
        let curve_a = Ecdf::from_sample(&sample_a)?;
        let curve_b = Ecdf::from_sample(&sample_b)?;
        let comparison = TwoSampleComparison::run(&sample_a, &sample_b)?;

        let mut warnings = Vec::new();

        // Anomaly feeds only the contour map, never the statistics
        let anomaly = match field_b.anomaly(field_a) {
            Ok(field) => Some(field),
            Err(err) => {
                warnings.push(format!("anomaly skipped: {err}"));
                None
            }
        };

        self.emit_contours(
            [
                (field_a, label_a, 'a'),
                (field_b, label_b, 'b'),
            ],
            anomaly.as_ref(),
            plotter,
            &mut warnings,
        );
        self.emit_distributions(
            &sample_a,
            &sample_b,
            label_a,
            label_b,
            plotter,
            &mut warnings,
        );

        Ok(ComparisonReport {
            label_a: label_a.to_string(),
            label_b: label_b.to_string(),
            summary_a,
            summary_b,
            curve_a,
            curve_b,
            comparison,
            warnings,
        })
    }

    fn emit_contours(
        &self,
        scenarios: [(&Field, &str, char); 2],
        anomaly: Option<&Field>,
        plotter: &mut dyn Plotter,
        warnings: &mut Vec<String>,
    ) {
        let mut panels: Vec<(&Field, String, char)> = scenarios
            .into_iter()
            .map(|(field, label, panel)| (field, label.to_string(), panel))
            .collect();
        if let Some(anomaly) = anomaly {
            panels.push((anomaly, "Anomaly".to_string(), 'c'));
        }

        for (field, label, panel) in panels {
            match self.contour_request(field, &label, panel) {
                Some(request) => {
                    if let Err(err) = plotter.contour(&request, &self.style) {
                        warnings.push(format!("contour '{label}' failed: {err}"));
                    }
                }
                None => {
                    warnings.push(format!(
                        "contour '{label}' skipped: field is not a 2D grid"
                    ));
                }
            }
        }
    }

    fn emit_distributions(
        &self,
        sample_a: &Sample,
        sample_b: &Sample,
        label_a: &str,
        label_b: &str,
        plotter: &mut dyn Plotter,
        warnings: &mut Vec<String>,
    ) {
        let series = vec![
            LabeledSeries {
                label: label_a.to_string(),
                values: sample_a.values().to_vec(),
            },
            LabeledSeries {
                label: label_b.to_string(),
                values: sample_b.values().to_vec(),
            },
        ];

        for (kind, panel) in [
            (DistributionKind::Kde, 'e'),
            (DistributionKind::BoxPlot, 'd'),
            (DistributionKind::EcdfCurves, 'f'),
        ] {
            let request = DistributionRequest {
                kind,
                series: series.clone(),
                quantity: self.spec.quantity.clone(),
                output: self.figure_path(panel),
            };
            if let Err(err) = plotter.distribution(&request, &self.style) {
                warnings.push(format!("{} chart failed: {err}", kind_name(kind)));
            }
        }
    }

    /// Build a contour request for a 2D field; `None` for other ranks
    fn contour_request(&self, field: &Field, label: &str, panel: char) -> Option<ContourRequest> {
        let grid = field.data().clone().into_dimensionality::<Ix2>().ok()?;
        let y = field.axis(0)?.values.clone();
        let x = field.axis(1)?.values.clone();

        Some(ContourRequest {
            x,
            y,
            grid,
            label: label.to_string(),
            quantity: self.spec.quantity.clone(),
            x_label: self.spec.x_label.clone(),
            y_label: self.spec.y_label.clone(),
            colormap: self.spec.colormap,
            invert_y: self.spec.invert_y,
            output: self.figure_path(panel),
        })
    }

    fn figure_path(&self, panel: char) -> PathBuf {
        self.output_dir.join(self.spec.figure_name(panel))
    }
}

fn kind_name(kind: DistributionKind) -> &'static str {
    match kind {
        DistributionKind::Kde => "KDE",
        DistributionKind::BoxPlot => "box",
        DistributionKind::EcdfCurves => "ECDF",
    }
}
