//! Grade dataset analysis
//!
//! This crate turns raw grade data into the labeled samples compared by
//! [`gradestat_stats`], and back out into summaries and CSV files.
//!
//! # Workflow
//!
//! 1. **Load** ([`dataset::GradeDataset`] or [`dataset::YearSamples`]): parse JSON grade data
//! 2. **Filter** ([`filter::FilterConfig`]): keep the rows matching the user's selections
//! 3. **Group** ([`grouping::group_by_year`]): build one sample per academic year
//! 4. **Analyze**: compare years with [`gradestat_stats::comparison::compare_all`]
//!    or summarize them with [`summary::YearSummary`]
//! 5. **Export** ([`export::write_csv`]): save the filtered rows as CSV
//!
//! # Examples
//!
//! ```
//! use gradestat_analysis::{dataset::GradeDataset, filter::FilterConfig, grouping};
//! use gradestat_stats::comparison::compare_all;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let json = r#"[
//!     {"semester": "2022.1", "gender": "Male", "topic": "Implementation",
//!      "frequency": 0.9, "open_ended": 0, "grade": 8.0},
//!     {"semester": "2022.2", "gender": "Female", "topic": "Implementation",
//!      "frequency": 0.7, "open_ended": 1, "grade": 6.5},
//!     {"semester": "2023.1", "gender": "Male", "topic": "Implementation",
//!      "frequency": 1.0, "open_ended": 0, "grade": 9.0},
//!     {"semester": "2023.1", "gender": "Female", "topic": "Implementation",
//!      "frequency": 0.4, "open_ended": 1, "grade": 5.5}
//! ]"#;
//! let dataset = GradeDataset::from_reader(json.as_bytes())?;
//!
//! let config = FilterConfig::default();
//! let rows = config.apply(&dataset.records)?;
//! let samples = grouping::group_by_year(&rows, config.years.as_deref())?;
//! let comparisons = compare_all(&samples)?;
//!
//! assert_eq!(comparisons.len(), 1);
//! assert_eq!(comparisons.results()[0].pair_label(), "2022 vs 2023");
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod export;
pub mod filter;
pub mod grouping;
pub mod summary;
