//! Two-sample nonparametric hypothesis tests
//!
//! Decides whether two scenarios' value distributions differ:
//!
//! - **Rank-sum** (Mann-Whitney U): do one scenario's values tend to be
//!   larger than the other's, without assuming a distribution shape?
//! - **Distribution equality** (two-sample Kolmogorov-Smirnov): do the two
//!   empirical distribution functions separate anywhere?
//!
//! Both tests use two-sided asymptotic p-values at every sample size; exact
//! small-sample enumeration is deliberately not implemented. Ties receive
//! mid-ranks, and the normal approximation carries the usual tie and
//! continuity corrections.

use serde::{Deserialize, Serialize};

use crate::ecdf::Ecdf;
use crate::error::{StatsError, StatsResult};
use crate::sample::Sample;

/// Significance level shared by both tests
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Statistic and two-sided p-value of a single test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Outcome of comparing two samples with both tests
///
/// `significant` is decided at full precision; any rounding happens only
/// in the human-readable report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleComparison {
    /// Mann-Whitney U test (U statistic of the first sample)
    pub rank_sum: TestOutcome,
    /// Two-sample Kolmogorov-Smirnov test (D statistic)
    pub distribution: TestOutcome,
    /// True iff either p-value falls below [`SIGNIFICANCE_LEVEL`]
    pub significant: bool,
}

impl TwoSampleComparison {
    /// Run both tests on the same pair of samples
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptySample`] if either sample is empty
    /// - [`StatsError::InsufficientData`] if the pooled sample is
    ///   degenerate (zero rank variance, e.g. two identical singletons)
    pub fn run(a: &Sample, b: &Sample) -> StatsResult<Self> {
        let rank_sum = mann_whitney_u(a, b)?;
        let distribution = ks_two_sample(a, b)?;
        let significant = rank_sum.p_value < SIGNIFICANCE_LEVEL
            || distribution.p_value < SIGNIFICANCE_LEVEL;

        Ok(Self {
            rank_sum,
            distribution,
            significant,
        })
    }
}

/// Mann-Whitney U rank-sum test
///
/// Ranks the pooled sample (average ranks for tied blocks), forms
/// `U = R_a - n_a(n_a + 1)/2`, and converts to a two-sided p-value via the
/// normal approximation with tie and continuity corrections.
///
/// The reported statistic is the U of sample `a`; swapping the arguments
/// flips U to `n_a * n_b - U` but leaves the p-value unchanged.
pub fn mann_whitney_u(a: &Sample, b: &Sample) -> StatsResult<TestOutcome> {
    if a.is_empty() || b.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let n = n1 + n2;

    // Pool and sort, remembering which sample each value came from
    let mut pooled: Vec<(f64, bool)> = Vec::with_capacity(a.len() + b.len());
    pooled.extend(a.values().iter().map(|&v| (v, true)));
    pooled.extend(b.values().iter().map(|&v| (v, false)));
    pooled.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap());

    let ranks = average_ranks(&pooled);

    let r1: f64 = pooled
        .iter()
        .zip(ranks.iter())
        .filter(|((_, from_a), _)| *from_a)
        .map(|(_, &rank)| rank)
        .sum();
    let u = r1 - n1 * (n1 + 1.0) / 2.0;

    let mu = n1 * n2 / 2.0;
    let ties = tie_correction(&pooled);
    let sigma_sq = n1 * n2 / 12.0 * ((n + 1.0) - ties / (n * (n - 1.0)));

    if sigma_sq <= 0.0 {
        return Err(StatsError::InsufficientData {
            reason: "pooled sample has zero rank variance".to_string(),
        });
    }

    // Continuity-corrected two-sided normal p-value
    let z = ((u - mu).abs() - 0.5).max(0.0) / sigma_sq.sqrt();
    let p_value = (2.0 * (1.0 - standard_normal_cdf(z))).clamp(0.0, 1.0);

    Ok(TestOutcome {
        statistic: u,
        p_value,
    })
}

/// Two-sample Kolmogorov-Smirnov distribution-equality test
///
/// D is the largest vertical gap between the two empirical CDFs, evaluated
/// at the pooled sorted distinct values of both samples. The two-sided
/// p-value uses the asymptotic Kolmogorov distribution with effective size
/// `sqrt(n_a * n_b / (n_a + n_b))` and the Stephens small-sample adjustment.
pub fn ks_two_sample(a: &Sample, b: &Sample) -> StatsResult<TestOutcome> {
    let ecdf_a = Ecdf::from_sample(a)?;
    let ecdf_b = Ecdf::from_sample(b)?;

    let mut pooled: Vec<f64> = Vec::with_capacity(a.len() + b.len());
    pooled.extend_from_slice(ecdf_a.values());
    pooled.extend_from_slice(ecdf_b.values());
    pooled.sort_by(|x, y| x.partial_cmp(y).unwrap());
    pooled.dedup();

    let d = pooled
        .iter()
        .map(|&x| (ecdf_a.evaluate(x) - ecdf_b.evaluate(x)).abs())
        .fold(0.0, f64::max);

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let en = (n1 * n2 / (n1 + n2)).sqrt();
    let lambda = (en + 0.12 + 0.11 / en) * d;
    let p_value = kolmogorov_survival(lambda);

    Ok(TestOutcome {
        statistic: d,
        p_value,
    })
}

/// Mid-ranks for a pooled, pre-sorted sample
///
/// Tied blocks all receive the average of the ranks they span.
fn average_ranks(sorted: &[(f64, bool)]) -> Vec<f64> {
    let n = sorted.len();
    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && sorted[j].0 == sorted[i].0 {
            j += 1;
        }
        // Positions i..j are tied; average rank = (i+1 + j) / 2
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for rank in ranks.iter_mut().take(j).skip(i) {
            *rank = avg_rank;
        }
        i = j;
    }
    ranks
}

/// Tie correction factor Σ t(t² - 1) over all tied blocks
fn tie_correction(sorted: &[(f64, bool)]) -> f64 {
    let n = sorted.len();
    let mut correction = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && sorted[j].0 == sorted[i].0 {
            j += 1;
        }
        let t = (j - i) as f64;
        if t > 1.0 {
            correction += t * (t * t - 1.0);
        }
        i = j;
    }
    correction
}

/// Standard normal CDF via the Abramowitz & Stegun erf approximation
///
/// Absolute error below 1.5e-7, ample for three-decimal reporting.
fn standard_normal_cdf(z: f64) -> f64 {
    let x = z / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let erf = 1.0
        - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();
    let erf = if x >= 0.0 { erf } else { -erf };
    0.5 * (1.0 + erf)
}

/// Kolmogorov survival function Q(λ) = 2 Σ (-1)^(j-1) exp(-2 j² λ²)
fn kolmogorov_survival(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }

    let mut sum = 0.0;
    let mut sign = 1.0;
    for j in 1..=100 {
        let term = (-2.0 * (j * j) as f64 * lambda * lambda).exp();
        sum += sign * term;
        if term < 1e-12 {
            break;
        }
        sign = -sign;
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> Sample {
        Sample::clean(values.iter().copied())
    }

    #[test]
    fn test_identical_samples_not_significant() {
        let a = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let cmp = TwoSampleComparison::run(&a, &b).unwrap();

        assert!((cmp.rank_sum.p_value - 1.0).abs() < 1e-6);
        assert_eq!(cmp.distribution.statistic, 0.0);
        assert_eq!(cmp.distribution.p_value, 1.0);
        assert!(!cmp.significant);
    }

    #[test]
    fn test_separated_samples_significant() {
        let a = sample(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        let b = sample(&[100.0, 100.0, 100.0, 100.0, 100.0]);
        let cmp = TwoSampleComparison::run(&a, &b).unwrap();

        assert!(cmp.rank_sum.p_value < 0.01);
        assert_eq!(cmp.distribution.statistic, 1.0);
        assert!(cmp.distribution.p_value < 0.01);
        assert!(cmp.significant);
    }

    #[test]
    fn test_symmetry() {
        let a = sample(&[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
        let b = sample(&[2.0, 4.0, 6.0, 8.0]);
        let ab = TwoSampleComparison::run(&a, &b).unwrap();
        let ba = TwoSampleComparison::run(&b, &a).unwrap();

        // U flips to n1*n2 - U, p-values and D are unchanged
        let n_product = (a.len() * b.len()) as f64;
        assert!((ab.rank_sum.statistic + ba.rank_sum.statistic - n_product).abs() < 1e-12);
        assert!((ab.rank_sum.p_value - ba.rank_sum.p_value).abs() < 1e-12);
        assert!((ab.distribution.statistic - ba.distribution.statistic).abs() < 1e-12);
        assert!((ab.distribution.p_value - ba.distribution.p_value).abs() < 1e-12);
        assert_eq!(ab.significant, ba.significant);
    }

    #[test]
    fn test_unequal_lengths_supported() {
        let a = sample(&[0.1, 0.2, 0.3]);
        let b = sample(&[0.15, 0.25, 0.35, 0.45, 0.55, 0.65]);
        let cmp = TwoSampleComparison::run(&a, &b).unwrap();
        assert!(cmp.rank_sum.p_value > 0.0 && cmp.rank_sum.p_value <= 1.0);
        assert!(cmp.distribution.p_value > 0.0 && cmp.distribution.p_value <= 1.0);
    }

    #[test]
    fn test_empty_sample_rejected() {
        let a = sample(&[]);
        let b = sample(&[1.0, 2.0]);
        assert!(matches!(
            TwoSampleComparison::run(&a, &b),
            Err(StatsError::EmptySample)
        ));
    }

    #[test]
    fn test_distinct_singletons_no_division_by_zero() {
        let a = sample(&[1.0]);
        let b = sample(&[2.0]);
        let cmp = TwoSampleComparison::run(&a, &b).unwrap();

        assert!((cmp.rank_sum.p_value - 1.0).abs() < 1e-6);
        assert_eq!(cmp.distribution.statistic, 1.0);
        assert!(!cmp.significant);
    }

    #[test]
    fn test_identical_singletons_insufficient() {
        let a = sample(&[5.0]);
        let b = sample(&[5.0]);
        assert!(matches!(
            TwoSampleComparison::run(&a, &b),
            Err(StatsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_mann_whitney_ties_get_mid_ranks() {
        // Pooled: [1, 2, 2, 3]; the tied 2s share rank 2.5
        let a = sample(&[1.0, 2.0]);
        let b = sample(&[2.0, 3.0]);
        let outcome = mann_whitney_u(&a, &b).unwrap();

        // R_a = 1 + 2.5 = 3.5, U = 3.5 - 3 = 0.5
        assert!((outcome.statistic - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ks_statistic_value() {
        // F_a steps at 1,2; F_b steps at 2,3; largest gap 0.5 at x=1
        let a = sample(&[1.0, 2.0]);
        let b = sample(&[2.0, 3.0]);
        let outcome = ks_two_sample(&a, &b).unwrap();
        assert!((outcome.statistic - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normal_cdf_reference_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((standard_normal_cdf(-1.96) - 0.025).abs() < 1e-3);
    }

    #[test]
    fn test_kolmogorov_survival_bounds() {
        assert_eq!(kolmogorov_survival(0.0), 1.0);
        assert!(kolmogorov_survival(0.5) > 0.9);
        assert!(kolmogorov_survival(2.0) < 1e-3);
    }
}
