//! Grade dataset structures
//!
//! Grades come in two shapes:
//!
//! - **Record list** ([`GradeDataset`]): one row per answer, carrying the
//!   attributes used for filtering
//! - **Year map** ([`YearSamples`]): grades already grouped by academic year
//!
//! # Record List
//!
//! ```json
//! [
//!   {
//!     "semester": "2019.1",
//!     "gender": "Female",
//!     "topic": "Software Architecture",
//!     "frequency": 0.85,
//!     "open_ended": 1,
//!     "grade": 7.5
//!   }
//! ]
//! ```
//!
//! # Year Map
//!
//! ```json
//! { "data": { "2022": [85, 78, 92], "2023": [82, 76, 90] } }
//! ```
//!
//! Years iterate the way a JavaScript object's keys do: integer keys
//! (`"999"`, `"2022"`) in ascending numeric order first, then every other key
//! (`"2022.2"`, `"2022.10"`) in document order.
//!
//! # Examples
//!
//! ```
//! use gradestat_analysis::dataset::{GradeDataset, QuestionType};
//!
//! let json = r#"[{"semester": "2022.2", "gender": "Male", "topic": "Implementation",
//!                "frequency": 0.9, "open_ended": 0, "grade": 8.0}]"#;
//! let dataset = GradeDataset::from_reader(json.as_bytes()).unwrap();
//! assert_eq!(dataset.records[0].open_ended, QuestionType::Closed);
//! ```

use std::{fmt, io};

use gradestat_stats::{StatsError, sample::Sample};
use serde::{Deserialize, Serialize};

/// Kind of question a grade was given for.
///
/// Serialized as `0` (closed) and `1` (open-ended).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuestionType {
    Closed,
    OpenEnded,
}

impl TryFrom<u8> for QuestionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Closed),
            1 => Ok(Self::OpenEnded),
            _ => Err(format!("invalid question type {value}, expected 0 or 1")),
        }
    }
}

impl From<QuestionType> for u8 {
    fn from(value: QuestionType) -> Self {
        match value {
            QuestionType::Closed => 0,
            QuestionType::OpenEnded => 1,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionType::Closed => "Closed",
            QuestionType::OpenEnded => "Open-ended",
        })
    }
}

/// A single graded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Semester identifier, prefixed by its year (e.g. `"2019.1"`)
    pub semester: String,
    pub gender: String,
    pub topic: String,
    /// Attendance frequency of the student, usually within `0.0..=1.0`
    pub frequency: f64,
    pub open_ended: QuestionType,
    pub grade: f64,
}

/// A list of grade records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeDataset {
    pub records: Vec<GradeRecord>,
}

impl GradeDataset {
    /// Parses a JSON record list.
    pub fn from_reader<R>(reader: R) -> serde_json::Result<Self>
    where
        R: io::Read,
    {
        let dataset: Self = serde_json::from_reader(reader)?;
        tracing::debug!(records = dataset.records.len(), "loaded grade records");
        Ok(dataset)
    }
}

/// Grades grouped by academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearSamples {
    /// `(year, grades)` pairs in iteration order
    #[serde(with = "year_map")]
    pub data: Vec<(String, Vec<f64>)>,
}

impl YearSamples {
    /// Parses a JSON year map.
    pub fn from_reader<R>(reader: R) -> serde_json::Result<Self>
    where
        R: io::Read,
    {
        let samples: Self = serde_json::from_reader(reader)?;
        tracing::debug!(years = samples.data.len(), "loaded year samples");
        Ok(samples)
    }

    /// Grades of `year`, if present.
    #[must_use]
    pub fn get(&self, year: &str) -> Option<&[f64]> {
        self.data
            .iter()
            .find(|(y, _)| y == year)
            .map(|(_, grades)| grades.as_slice())
    }

    /// Converts the map into samples in year order.
    ///
    /// When `years` is given, only those years are returned, in that order;
    /// a year missing from the map yields an empty sample.
    pub fn to_samples(&self, years: Option<&[String]>) -> Result<Vec<Sample>, StatsError> {
        match years {
            Some(years) => years
                .iter()
                .map(|year| {
                    let grades = self.get(year).map(<[f64]>::to_vec).unwrap_or_default();
                    Sample::new(year.as_str(), grades)
                })
                .collect(),
            None => self
                .data
                .iter()
                .map(|(year, grades)| Sample::new(year.as_str(), grades.clone()))
                .collect(),
        }
    }
}

/// The key of a JavaScript array index: a canonical `u32` below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|&n| n != u32::MAX && n.to_string() == key)
}

/// Puts integer keys first in ascending order; other keys keep their order.
pub(crate) fn sort_years(data: &mut [(String, Vec<f64>)]) {
    data.sort_by_key(|(year, _)| array_index(year).map_or((1, 0), |n| (0, n)));
}

/// JSON object <-> ordered `(year, grades)` list
mod year_map {
    use std::fmt;

    use serde::{
        Deserializer, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap as _,
    };

    pub(super) fn serialize<S>(
        data: &[(String, Vec<f64>)],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(data.len()))?;
        for (year, grades) in data {
            map.serialize_entry(year, grades)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Vec<(String, Vec<f64>)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(YearMapVisitor)
    }

    struct YearMapVisitor;

    impl<'de> Visitor<'de> for YearMapVisitor {
        type Value = Vec<(String, Vec<f64>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from year to a list of grades")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut data: Self::Value = Vec::new();
            while let Some((year, grades)) = access.next_entry::<String, Vec<f64>>()? {
                // a repeated key keeps its first position and its last value
                match data.iter_mut().find(|(y, _)| *y == year) {
                    Some(entry) => entry.1 = grades,
                    None => data.push((year, grades)),
                }
            }
            super::sort_years(&mut data);
            Ok(data)
        }
    }
}
