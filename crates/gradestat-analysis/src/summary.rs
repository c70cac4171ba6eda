//! Per-year grade summaries
//!
//! These are the figures behind the year-by-year box plots and the
//! average-grade bar chart.

use gradestat_stats::{box_plot::BoxPlotSummary, descriptive::DescriptiveStats, sample::Sample};

/// Summary of one year's grades.
///
/// `stats` and `box_plot` are `None` for a year with no grades.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub label: String,
    pub count: usize,
    pub stats: Option<DescriptiveStats>,
    pub box_plot: Option<BoxPlotSummary>,
}

impl YearSummary {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let mut sorted = sample.values().to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            label: sample.label().to_owned(),
            count: sorted.len(),
            stats: DescriptiveStats::from_sorted(&sorted),
            box_plot: BoxPlotSummary::from_sorted(&sorted),
        }
    }

    /// Summarizes every sample, keeping their order.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Vec<Self> {
        samples.iter().map(Self::from_sample).collect()
    }

    /// Average grade, the bar height of the average-grade chart.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.stats.as_ref().map(|s| s.mean)
    }
}
