//! Human-readable report rendering
//!
//! Separated from the pipeline so callers can pick their sink: consume the
//! structured [`ComparisonReport`] directly, serialize it, or print this
//! text rendering. Test statistics and p-values are rounded to three
//! decimals for display only; the significance decision is made upstream
//! at full precision.

use std::fmt::Write;

use strait_stats::SummaryStats;

use crate::pipeline::ComparisonReport;

/// Render a comparison report as console-style text
pub fn render_text(report: &ComparisonReport) -> String {
    let mut out = String::new();

    write_summary(&mut out, &report.label_a, &report.summary_a);
    write_summary(&mut out, &report.label_b, &report.summary_b);

    let versus = format!("{} vs {}", report.label_a, report.label_b);
    let _ = writeln!(out, "Mann-Whitney U test: {versus}");
    let _ = writeln!(
        out,
        "Statistic: {:.3}, p-value: {:.3}",
        report.comparison.rank_sum.statistic, report.comparison.rank_sum.p_value
    );
    let _ = writeln!(out, "KS test: {versus}");
    let _ = writeln!(
        out,
        "Statistic: {:.3}, p-value: {:.3}",
        report.comparison.distribution.statistic, report.comparison.distribution.p_value
    );

    if report.comparison.significant {
        let _ = writeln!(out, "The distributions are significantly different.");
    } else {
        let _ = writeln!(out, "No significant difference between the distributions.");
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for warning in &report.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }

    out
}

fn write_summary(out: &mut String, label: &str, summary: &SummaryStats) {
    let _ = writeln!(out, "{label} Statistics:");
    let _ = writeln!(out, "Mean: {}", summary.mean);
    let _ = writeln!(out, "Median: {}", summary.median);
    let _ = writeln!(out, "Max: {}", summary.max);
    let _ = writeln!(out, "Min: {}", summary.min);
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strait_stats::{Ecdf, Sample, SummaryStats, TwoSampleComparison};

    fn build_report(a: &[f64], b: &[f64], warnings: Vec<String>) -> ComparisonReport {
        let sample_a = Sample::clean(a.iter().copied());
        let sample_b = Sample::clean(b.iter().copied());
        ComparisonReport {
            label_a: "Open".to_string(),
            label_b: "Closed".to_string(),
            summary_a: SummaryStats::from_sample(&sample_a).unwrap(),
            summary_b: SummaryStats::from_sample(&sample_b).unwrap(),
            curve_a: Ecdf::from_sample(&sample_a).unwrap(),
            curve_b: Ecdf::from_sample(&sample_b).unwrap(),
            comparison: TwoSampleComparison::run(&sample_a, &sample_b).unwrap(),
            warnings,
        }
    }

    #[test]
    fn test_render_identical_samples() {
        let report = build_report(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            Vec::new(),
        );
        let text = render_text(&report);

        assert!(text.contains("Open Statistics:"));
        assert!(text.contains("Closed Statistics:"));
        assert!(text.contains("Mann-Whitney U test: Open vs Closed"));
        assert!(text.contains("p-value: 1.000"));
        assert!(text.contains("No significant difference between the distributions."));
        assert!(!text.contains("Warnings:"));
    }

    #[test]
    fn test_render_significant_difference() {
        let report = build_report(
            &[1.0, 1.2, 0.9, 1.1, 1.0, 0.8],
            &[9.0, 9.2, 8.9, 9.1, 9.0, 8.8],
            Vec::new(),
        );
        let text = render_text(&report);
        assert!(text.contains("The distributions are significantly different."));
    }

    #[test]
    fn test_render_includes_warnings() {
        let report = build_report(
            &[1.0, 2.0, 3.0],
            &[1.0, 2.0, 3.0],
            vec!["anomaly skipped: Shape mismatch: [2, 3] vs [2, 2]".to_string()],
        );
        let text = render_text(&report);
        assert!(text.contains("Warnings:"));
        assert!(text.contains("anomaly skipped"));
    }

    #[test]
    fn test_rounding_is_display_only() {
        // p = 1.0 renders as 1.000 while the stored value keeps precision
        let report = build_report(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], Vec::new());
        let text = render_text(&report);
        assert!(text.contains("1.000"));
        assert!(report.comparison.distribution.p_value == 1.0);
    }
}
