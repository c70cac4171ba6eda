//! Welch's unequal-variance two-sample t-test
//!
//! The test compares the means of two independent samples without assuming
//! that their population variances are equal.
//!
//! # Formulas
//!
//! ```text
//! se = sqrt(var_a / n_a + var_b / n_b)
//! t  = (mean_a - mean_b) / se
//! df = (var_a/n_a + var_b/n_b)^2
//!      / ((var_a/n_a)^2 / (n_a - 1) + (var_b/n_b)^2 / (n_b - 1))
//! p  = 2 * (1 - CDF_t(|t|, df))
//! ```
//!
//! # Boundaries
//!
//! - Either sample with fewer than two observations: [`StatsError::InvalidInput`].
//! - `se == 0` with different means: [`StatsError::DegenerateComparison`].
//! - `se == 0` with equal means (both samples constant at the same value):
//!   `t = 0`, `p = 1`, and `df = n_a + n_b - 2`.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::{
    descriptive::{mean, sample_variance},
    error::StatsError,
};

/// Significance level used to classify a comparison as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of a Welch's t-test between two samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTTest {
    /// `(mean_a - mean_b) / se`
    pub t_statistic: f64,
    /// Welch–Satterthwaite degrees of freedom.
    pub degrees_of_freedom: f64,
    /// Two-tailed p-value, within `0.0..=1.0`.
    pub p_value: f64,
}

impl WelchTTest {
    /// Runs the test on two samples.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gradestat_stats::ttest::WelchTTest;
    /// let a = [85.0, 78.0, 92.0, 75.0, 88.0];
    /// let b = [82.0, 76.0, 90.0, 80.0, 85.0];
    /// let test = WelchTTest::compute(&a, &b).unwrap();
    /// assert!(test.t_statistic.abs() < 1.0);
    /// assert!(!test.is_significant());
    /// ```
    #[expect(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn compute(a: &[f64], b: &[f64]) -> Result<Self, StatsError> {
        for sample in [a, b] {
            if sample.len() < 2 {
                return Err(StatsError::InvalidInput {
                    len: sample.len(),
                    required: 2,
                });
            }
        }

        let n_a = a.len() as f64;
        let n_b = b.len() as f64;
        let mean_a = mean(a)?;
        let mean_b = mean(b)?;
        let term_a = sample_variance(a, mean_a)? / n_a;
        let term_b = sample_variance(b, mean_b)? / n_b;

        let se = (term_a + term_b).sqrt();
        if se == 0.0 {
            if mean_a != mean_b {
                return Err(StatsError::DegenerateComparison { mean_a, mean_b });
            }
            return Ok(Self {
                t_statistic: 0.0,
                degrees_of_freedom: n_a + n_b - 2.0,
                p_value: 1.0,
            });
        }

        let t_statistic = (mean_a - mean_b) / se;
        // df in terms of each sample's share of the variance; squaring the
        // raw terms underflows for tiny grades.
        let total = term_a + term_b;
        let (share_a, share_b) = (term_a / total, term_b / total);
        let degrees_of_freedom =
            1.0 / (share_a.powi(2) / (n_a - 1.0) + share_b.powi(2) / (n_b - 1.0));
        let p_value = two_tailed_p_value(t_statistic, degrees_of_freedom)?;

        Ok(Self {
            t_statistic,
            degrees_of_freedom,
            p_value,
        })
    }

    /// Whether `p_value` is below [`SIGNIFICANCE_LEVEL`].
    #[must_use]
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Two-tailed p-value of `t` under a Student's t distribution with `df`
/// degrees of freedom.
///
pub fn two_tailed_p_value(t: f64, df: f64) -> Result<f64, StatsError> {
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::InvalidDegreesOfFreedom { df })?;
    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}
