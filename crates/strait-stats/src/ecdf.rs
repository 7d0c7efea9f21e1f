//! Empirical Cumulative Distribution Function (ECDF)
//!
//! The ECDF is a step function that estimates the underlying CDF of a
//! sample. For a sample of n values, ECDF(x) = (number of values <= x) / n.
//!
//! ECDFs are preferred here over histograms for scenario comparison:
//! there is no bin width to choose, all information is preserved, and the
//! distribution-equality test reads straight off the two curves.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::sample::Sample;

/// Empirical Cumulative Distribution Function of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted values
    values: Vec<f64>,
    /// Cumulative fractions (i+1)/n at each point, strictly increasing
    fractions: Vec<f64>,
}

impl Ecdf {
    /// Build the ECDF of a sample
    ///
    /// The i-th smallest value (0-indexed) gets fraction `(i + 1) / n`.
    /// Tied values are kept, each with its own fraction, so repeated
    /// values produce a vertical run of points at the same x. The curve
    /// is never de-duplicated by value.
    ///
    /// Time complexity: O(n log n) for sorting.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] for a zero-length sample.
    pub fn from_sample(sample: &Sample) -> StatsResult<Self> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let values = sample.sorted();
        let n = values.len() as f64;
        let fractions = (1..=values.len()).map(|i| i as f64 / n).collect();

        Ok(Self { values, fractions })
    }

    /// Evaluate the ECDF at a point
    ///
    /// Returns the fraction of sample values <= x.
    /// Time complexity: O(log n).
    pub fn evaluate(&self, x: f64) -> f64 {
        let idx = self.values.partition_point(|v| *v <= x);
        if idx == 0 {
            0.0
        } else {
            self.fractions[idx - 1]
        }
    }

    /// Number of points on the curve (equals the sample length)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the curve is empty (never true for a constructed ECDF)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sorted values, for plotting
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The cumulative fractions, for plotting
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Step-function coordinates (x, y) suitable for drawing the curve
    pub fn plot_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.values.len() * 2);

        // Start at (min, 0)
        points.push((self.values[0], 0.0));

        for i in 0..self.values.len() {
            // Horizontal run to this point
            if i > 0 {
                points.push((self.values[i], self.fractions[i - 1]));
            }
            // Vertical step up
            points.push((self.values[i], self.fractions[i]));
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecdf_fractions() {
        let sample = Sample::clean([3.0, 1.0, 2.0, 5.0, 4.0]);
        let ecdf = Ecdf::from_sample(&sample).unwrap();

        assert_eq!(ecdf.len(), 5);
        assert_eq!(ecdf.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((ecdf.fractions()[0] - 0.2).abs() < 1e-12);
        assert_eq!(*ecdf.fractions().last().unwrap(), 1.0);

        // Strictly increasing
        for pair in ecdf.fractions().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_ecdf_ties_keep_fractions() {
        let sample = Sample::clean([2.0, 1.0, 2.0, 2.0, 1.0, 3.0]);
        let ecdf = Ecdf::from_sample(&sample).unwrap();

        // Sorted: [1, 1, 2, 2, 2, 3]; ties are not collapsed
        assert_eq!(ecdf.values(), &[1.0, 1.0, 2.0, 2.0, 2.0, 3.0]);
        assert!((ecdf.evaluate(1.0) - 2.0 / 6.0).abs() < 1e-12);
        assert!((ecdf.evaluate(2.0) - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_ecdf_evaluate_outside_range() {
        let sample = Sample::clean([1.0, 2.0, 3.0]);
        let ecdf = Ecdf::from_sample(&sample).unwrap();

        assert_eq!(ecdf.evaluate(0.5), 0.0);
        assert_eq!(ecdf.evaluate(10.0), 1.0);
    }

    #[test]
    fn test_ecdf_empty_sample_errors() {
        let sample = Sample::clean([f64::NAN]);
        assert!(matches!(
            Ecdf::from_sample(&sample),
            Err(StatsError::EmptySample)
        ));
    }

    #[test]
    fn test_ecdf_singleton() {
        let sample = Sample::clean([7.5]);
        let ecdf = Ecdf::from_sample(&sample).unwrap();
        assert_eq!(ecdf.values(), &[7.5]);
        assert_eq!(ecdf.fractions(), &[1.0]);
    }

    #[test]
    fn test_ecdf_plot_points() {
        let sample = Sample::clean([1.0, 2.0, 3.0]);
        let ecdf = Ecdf::from_sample(&sample).unwrap();
        let points = ecdf.plot_points();

        assert_eq!(points[0], (1.0, 0.0));
        assert_eq!(*points.last().unwrap(), (3.0, 1.0));
    }
}
