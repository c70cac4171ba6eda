//! Statistical utilities for comparing grade distributions.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, unbiased sample variance, median, etc.
//! - **Percentiles**: linearly interpolated percentile values
//! - **Box-plot summaries**: quartiles, whiskers and outliers
//! - **Welch's t-test**: two-sample test without the equal-variance assumption
//! - **Pairwise comparison**: t-tests across every pair of labeled samples
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`box_plot`]: Five-number summaries for box plots
//! - [`sample`]: Labeled, immutable observation sequences
//! - [`ttest`]: Welch's unequal-variance t-test
//! - [`comparison`]: Pairwise comparison of labeled samples
//!
//! # Examples
//!
//! ## Comparing academic years
//!
//! ```
//! use gradestat_stats::{comparison::compare_all, sample::Sample};
//!
//! let samples = vec![
//!     Sample::new("2022", vec![85.0, 78.0, 92.0, 75.0, 88.0]).unwrap(),
//!     Sample::new("2023", vec![82.0, 76.0, 90.0, 80.0, 85.0]).unwrap(),
//!     Sample::new("2024", vec![88.0, 84.0, 91.0, 77.0, 83.0]).unwrap(),
//! ];
//!
//! for result in &compare_all(&samples).unwrap() {
//!     if let Ok(test) = &result.outcome {
//!         println!("{}: t={:.2} p={:.5}", result.pair_label(), test.t_statistic, test.p_value);
//!     }
//! }
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use gradestat_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod box_plot;
pub mod comparison;
pub mod descriptive;
pub mod error;
pub mod percentiles;
pub mod sample;
pub mod ttest;

pub use self::error::StatsError;
