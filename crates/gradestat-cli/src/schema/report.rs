use chrono::{DateTime, Utc};
use gradestat_analysis::{filter::FilterConfig, summary::YearSummary};
use gradestat_stats::comparison::PairResult;
use serde::{Deserialize, Serialize};

/// Pairwise t-test results saved by the `compare` command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    /// Path of the grade file the samples came from
    pub source: String,
    pub filter: FilterConfig,
    pub comparisons: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonRow {
    pub label_a: String,
    pub label_b: String,
    pub t_statistic: Option<f64>,
    pub degrees_of_freedom: Option<f64>,
    pub p_value: Option<f64>,
    pub significant: bool,
    /// Why the test could not be computed
    pub error: Option<String>,
}

impl From<&PairResult> for ComparisonRow {
    fn from(result: &PairResult) -> Self {
        let test = result.outcome.as_ref().ok();
        Self {
            label_a: result.label_a.clone(),
            label_b: result.label_b.clone(),
            t_statistic: test.map(|t| t.t_statistic),
            degrees_of_freedom: test.map(|t| t.degrees_of_freedom),
            p_value: test.map(|t| t.p_value),
            significant: result.significant,
            error: result.outcome.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Per-year summaries saved by the `summary` command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub filter: FilterConfig,
    pub years: Vec<YearSummaryRow>,
}

/// Box-plot figures and mean of one year; statistics are absent for empty years
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YearSummaryRow {
    pub label: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub lower_whisker: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub upper_whisker: Option<f64>,
    pub max: Option<f64>,
    pub outliers: Vec<f64>,
}

impl From<&YearSummary> for YearSummaryRow {
    fn from(summary: &YearSummary) -> Self {
        let stats = summary.stats.as_ref();
        let box_plot = summary.box_plot.as_ref();
        Self {
            label: summary.label.clone(),
            count: summary.count,
            mean: stats.map(|s| s.mean),
            std_dev: stats.and_then(|s| s.std_dev),
            min: stats.map(|s| s.min),
            lower_whisker: box_plot.map(|b| b.lower_whisker),
            q1: box_plot.map(|b| b.q1),
            median: box_plot.map(|b| b.median),
            q3: box_plot.map(|b| b.q3),
            upper_whisker: box_plot.map(|b| b.upper_whisker),
            max: stats.map(|s| s.max),
            outliers: box_plot.map(|b| b.outliers.clone()).unwrap_or_default(),
        }
    }
}
