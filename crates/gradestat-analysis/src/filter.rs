//! Row filtering by student and question attributes
//!
//! A [`FilterConfig`] holds every selection the user can make. It is plain
//! data: build one, then pass it to [`FilterConfig::apply`] to get the
//! matching rows. An empty configuration keeps every row whose frequency lies
//! in `0.0..=1.0`.
//!
//! # Examples
//!
//! ```
//! use gradestat_analysis::{
//!     dataset::{GradeRecord, QuestionType},
//!     filter::FilterConfig,
//! };
//!
//! let record = GradeRecord {
//!     semester: "2023.1".to_owned(),
//!     gender: "Female".to_owned(),
//!     topic: "Design with UML".to_owned(),
//!     frequency: 0.75,
//!     open_ended: QuestionType::OpenEnded,
//!     grade: 9.0,
//! };
//!
//! let config = FilterConfig {
//!     gender: Some("Female".to_owned()),
//!     question_type: Some(QuestionType::OpenEnded),
//!     ..FilterConfig::default()
//! };
//! assert!(config.matches(&record));
//! ```

use serde::{Deserialize, Serialize};

use crate::dataset::{GradeRecord, QuestionType};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum FilterError {
    #[display("invalid frequency range {min}..={max}")]
    InvalidFrequencyRange { min: f64, max: f64 },
}

/// Inclusive range of accepted attendance frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub min: f64,
    pub max: f64,
}

impl Default for FrequencyRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl FrequencyRange {
    #[must_use]
    pub fn contains(&self, frequency: f64) -> bool {
        self.min <= frequency && frequency <= self.max
    }
}

/// Filter selections applied to a grade dataset.
///
/// `None` fields match every row. Loaded from JSON, missing fields take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Exact gender to keep
    pub gender: Option<String>,
    /// Exact topic to keep
    pub topic: Option<String>,
    pub frequency_range: FrequencyRange,
    pub question_type: Option<QuestionType>,
    /// Years to group into samples, in comparison order. `None` uses every
    /// year present in the data.
    pub years: Option<Vec<String>>,
}

impl FilterConfig {
    /// Checks that the frequency range is finite and not inverted.
    pub fn validate(&self) -> Result<(), FilterError> {
        let FrequencyRange { min, max } = self.frequency_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(FilterError::InvalidFrequencyRange { min, max });
        }
        Ok(())
    }

    /// Whether `record` passes every selection.
    #[must_use]
    pub fn matches(&self, record: &GradeRecord) -> bool {
        let matches_gender = self.gender.as_ref().is_none_or(|g| *g == record.gender);
        let matches_topic = self.topic.as_ref().is_none_or(|t| *t == record.topic);
        let matches_question = self.question_type.is_none_or(|q| q == record.open_ended);
        self.frequency_range.contains(record.frequency)
            && matches_gender
            && matches_topic
            && matches_question
    }

    /// Returns the rows passing the filter, in their original order.
    pub fn apply<'a, I>(&self, records: I) -> Result<Vec<GradeRecord>, FilterError>
    where
        I: IntoIterator<Item = &'a GradeRecord>,
    {
        self.validate()?;
        let mut total = 0;
        let filtered = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|record| self.matches(record))
            .cloned()
            .collect::<Vec<_>>();
        tracing::debug!(total, kept = filtered.len(), "applied filter");
        Ok(filtered)
    }
}
