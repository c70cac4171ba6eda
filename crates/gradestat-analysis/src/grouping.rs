//! Grouping grade records into per-year samples

use gradestat_stats::{StatsError, sample::Sample};

use crate::dataset::{self, GradeRecord};

/// Returns the year part of a semester identifier: its leading ASCII digits,
/// or the whole identifier when it does not start with a digit.
///
/// ```
/// # use gradestat_analysis::grouping::year_of;
/// assert_eq!(year_of("2019.2"), "2019");
/// assert_eq!(year_of("2023"), "2023");
/// assert_eq!(year_of("Fall"), "Fall");
/// ```
#[must_use]
pub fn year_of(semester: &str) -> &str {
    let end = semester
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(semester.len());
    if end == 0 { semester } else { &semester[..end] }
}

/// Splits `records` into one grade sample per year.
///
/// With explicit `years`, a record belongs to every year its semester starts
/// with, and samples follow the order of `years` (a year without records
/// yields an empty sample). Otherwise the years found by [`year_of`] are used,
/// numeric years in ascending order before any others.
pub fn group_by_year(
    records: &[GradeRecord],
    years: Option<&[String]>,
) -> Result<Vec<Sample>, StatsError> {
    let samples = match years {
        Some(years) => years
            .iter()
            .map(|year| {
                let grades = records
                    .iter()
                    .filter(|r| r.semester.starts_with(year.as_str()))
                    .map(|r| r.grade)
                    .collect();
                Sample::new(year.as_str(), grades)
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => {
            let mut by_year = Vec::<(String, Vec<f64>)>::new();
            for record in records {
                let year = year_of(&record.semester);
                match by_year.iter_mut().find(|(y, _)| y == year) {
                    Some((_, grades)) => grades.push(record.grade),
                    None => by_year.push((year.to_owned(), vec![record.grade])),
                }
            }
            dataset::sort_years(&mut by_year);
            by_year
                .into_iter()
                .map(|(year, grades)| Sample::new(year, grades))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    for sample in &samples {
        tracing::debug!(year = sample.label(), grades = sample.len(), "grouped year");
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QuestionType;

    fn record(semester: &str, grade: f64) -> GradeRecord {
        GradeRecord {
            semester: semester.to_owned(),
            gender: "Male".to_owned(),
            topic: "Implementation".to_owned(),
            frequency: 1.0,
            open_ended: QuestionType::Closed,
            grade,
        }
    }

    #[test]
    fn test_discovered_years_are_sorted() {
        let records = [
            record("2023.1", 8.0),
            record("2019.1", 6.0),
            record("2019.2", 7.0),
            record("2022.2", 5.0),
        ];
        let samples = group_by_year(&records, None).unwrap();
        let labels = samples.iter().map(Sample::label).collect::<Vec<_>>();
        assert_eq!(labels, ["2019", "2022", "2023"]);
        assert_eq!(samples[0].values(), &[6.0, 7.0]);
    }

    #[test]
    fn test_discovered_years_sort_numerically() {
        let records = [
            record("2023.1", 8.0),
            record("Fall", 4.0),
            record("999.2", 6.0),
            record("1000.1", 7.0),
        ];
        let samples = group_by_year(&records, None).unwrap();
        let labels = samples.iter().map(Sample::label).collect::<Vec<_>>();
        assert_eq!(labels, ["999", "1000", "2023", "Fall"]);
    }

    #[test]
    fn test_explicit_years_keep_order_and_empty_groups() {
        let records = [record("2019.1", 6.0), record("2023.1", 8.0)];
        let years = ["2023".to_owned(), "2022".to_owned(), "2019".to_owned()];
        let samples = group_by_year(&records, Some(&years)).unwrap();
        assert_eq!(samples[0].values(), &[8.0]);
        assert!(samples[1].is_empty());
        assert_eq!(samples[2].values(), &[6.0]);
    }

    #[test]
    fn test_non_finite_grade_is_rejected() {
        let records = [record("2019.1", f64::NAN)];
        assert!(group_by_year(&records, None).is_err());
    }
}
