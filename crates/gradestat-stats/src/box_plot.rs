use crate::percentiles::{Percentiles, QUARTILES};

/// Multiplier applied to the interquartile range to place the whisker fences.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// The five-number summary drawn by a box plot, plus its outliers.
///
/// Whiskers extend to the most extreme observations that still lie within
/// `1.5 * IQR` of the box; everything beyond them is reported in
/// [`outliers`](Self::outliers).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSummary {
    /// First quartile (P25).
    pub q1: f64,
    /// Median (P50).
    pub median: f64,
    /// Third quartile (P75).
    pub q3: f64,
    /// Lowest observation not below `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Highest observation not above `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Observations outside the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Summarizes unsorted values, skipping NaN and infinities.
    ///
    /// Returns `None` when no finite value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gradestat_stats::box_plot::BoxPlotSummary;
    /// let summary = BoxPlotSummary::new([85.0, 78.0, 92.0, 75.0, 88.0]).unwrap();
    /// assert_eq!(summary.q1, 78.0);
    /// assert_eq!(summary.median, 85.0);
    /// assert_eq!(summary.q3, 88.0);
    /// assert!(summary.outliers.is_empty());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Summarizes pre-sorted values.
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
        if sorted_values.is_empty() {
            return None;
        }

        let quartiles = Percentiles::from_sorted(sorted_values, &QUARTILES);
        let q1 = quartiles.get(QUARTILES[0])?;
        let median = quartiles.get(QUARTILES[1])?;
        let q3 = quartiles.get(QUARTILES[2])?;
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted_values
            .iter()
            .partition(|&&v| low_fence <= v && v <= high_fence);
        // q1..=q3 always contains at least one observation, so `inside` is non-empty
        let lower_whisker = *inside.first()?;
        let upper_whisker = *inside.last()?;

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Interquartile range `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
