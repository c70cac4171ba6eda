/// Percentile points of the box-plot quartiles: Q1, median and Q3.
pub const QUARTILES: [f64; 3] = [25.0, 50.0, 75.0];

/// Percentile values of one dataset, looked up by percentile point.
///
/// # Examples
///
/// ```
/// use gradestat_stats::percentiles::{Percentiles, QUARTILES};
///
/// let quartiles = Percentiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0], &QUARTILES);
/// assert_eq!(quartiles.get(25.0), Some(2.0));
/// assert_eq!(quartiles.get(50.0), Some(3.0));
/// assert_eq!(quartiles.get(90.0), None); // not requested
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// `(percentile, value)` pairs in request order
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes the requested percentile points of sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Value at `percentile`, or `None` if it was not requested.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| (p - percentile).abs() < f64::EPSILON)
            .map(|&(_, value)| value)
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the closest ranks: the k-th percentile
/// sits at fractional position `(n - 1) * k / 100`.
///
/// Returns `f64::NAN` if the input is empty. `percentile` is clamped to
/// `0.0..=100.0`.
///
/// # Examples
///
/// ```
/// use gradestat_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = (sorted_values.len() - 1) as f64 * percentile.clamp(0.0, 100.0) / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - rank.floor();
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * weight
}
