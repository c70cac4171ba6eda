use crate::{error::StatsError, percentiles};

/// Computes the arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use gradestat_stats::descriptive::mean;
/// assert_eq!(mean(&[85.0, 78.0, 92.0, 75.0, 88.0]).unwrap(), 83.6);
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::InvalidInput {
            len: 0,
            required: 1,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the unbiased sample variance `Σ(x − mean)² / (n − 1)`.
///
/// `mean` must be the mean of `values`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] if `values` has fewer than two elements.
///
/// # Examples
///
/// ```
/// # use gradestat_stats::descriptive::{mean, sample_variance};
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let m = mean(&values).unwrap();
/// let var = sample_variance(&values, m).unwrap();
/// assert!((var - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_variance(values: &[f64], mean: f64) -> Result<f64, StatsError> {
    if values.len() < 2 {
        return Err(StatsError::InvalidInput {
            len: values.len(),
            required: 2,
        });
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Descriptive statistics summarizing a dataset.
///
/// Variance and standard deviation are the sample (n − 1) estimates and are
/// `None` for single-element datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of observations.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median of the dataset (mean of the two middle values for even counts).
    pub median: f64,
    /// The unbiased sample variance.
    pub variance: Option<f64>,
    /// The sample standard deviation.
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// NaN and infinite values are skipped.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one finite value
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// # use gradestat_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, Some(2.5));
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let mean = mean(sorted_values).ok()?;
        let median = percentiles::compute_percentile(sorted_values, 50.0);
        let variance = sample_variance(sorted_values, mean).ok();
        let std_dev = variance.map(f64::sqrt);

        Some(Self {
            count: sorted_values.len(),
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}
