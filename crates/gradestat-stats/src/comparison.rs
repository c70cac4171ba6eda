//! Pairwise Welch's t-tests across labeled samples
//!
//! [`compare_all`] runs [`WelchTTest`] for every unordered pair of samples,
//! in input order: `(0, 1), (0, 2), ..., (1, 2), ...`. A pair that cannot be
//! tested keeps its error in [`PairResult::outcome`]; the remaining pairs are
//! still computed.
//!
//! # Examples
//!
//! ```
//! use gradestat_stats::{comparison::compare_all, sample::Sample};
//!
//! let samples = vec![
//!     Sample::new("2022", vec![85.0, 78.0, 92.0, 75.0, 88.0]).unwrap(),
//!     Sample::new("2023", vec![82.0, 76.0, 90.0, 80.0, 85.0]).unwrap(),
//!     Sample::new("2024", vec![88.0]).unwrap(),
//! ];
//! let set = compare_all(&samples).unwrap();
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.results()[0].pair_label(), "2022 vs 2023");
//! assert!(set.results()[0].outcome.is_ok());
//! assert!(set.results()[1].outcome.is_err()); // 2024 has a single grade
//! ```

use std::collections::HashSet;

use crate::{error::StatsError, sample::Sample, ttest::WelchTTest};

/// Comparison of one pair of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PairResult {
    pub label_a: String,
    pub label_b: String,
    pub outcome: Result<WelchTTest, StatsError>,
    /// `p < 0.05`; always `false` when the test could not be computed.
    pub significant: bool,
}

impl PairResult {
    /// Compares two samples.
    #[must_use]
    pub fn compare(a: &Sample, b: &Sample) -> Self {
        let outcome = WelchTTest::compute(a.values(), b.values());
        let significant = outcome.as_ref().is_ok_and(WelchTTest::is_significant);
        Self {
            label_a: a.label().to_owned(),
            label_b: b.label().to_owned(),
            outcome,
            significant,
        }
    }

    /// `"<label_a> vs <label_b>"`
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{} vs {}", self.label_a, self.label_b)
    }
}

/// All pairwise results of one [`compare_all`] call, in pair order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    results: Vec<PairResult>,
}

impl ComparisonSet {
    #[must_use]
    pub fn results(&self) -> &[PairResult] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pairs whose test could not be computed.
    pub fn failures(&self) -> impl Iterator<Item = (&PairResult, &StatsError)> + '_ {
        self.results
            .iter()
            .filter_map(|r| r.outcome.as_ref().err().map(|e| (r, e)))
    }

    /// Pairs with a significant difference.
    pub fn significant(&self) -> impl Iterator<Item = &PairResult> + '_ {
        self.results.iter().filter(|r| r.significant)
    }
}

impl IntoIterator for ComparisonSet {
    type Item = PairResult;
    type IntoIter = std::vec::IntoIter<PairResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a PairResult;
    type IntoIter = std::slice::Iter<'a, PairResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Compares every unordered pair of `samples`.
///
/// Produces `n * (n - 1) / 2` results for `n` samples, ordered by first then
/// second index.
///
/// # Errors
///
/// Returns [`StatsError::DuplicateLabel`] if two samples share a label.
/// Failures of individual pairs are recorded in their [`PairResult`].
pub fn compare_all(samples: &[Sample]) -> Result<ComparisonSet, StatsError> {
    let mut seen = HashSet::new();
    for sample in samples {
        if !seen.insert(sample.label()) {
            return Err(StatsError::DuplicateLabel {
                label: sample.label().to_owned(),
            });
        }
    }

    let results = samples
        .iter()
        .enumerate()
        .flat_map(|(i, a)| samples[i + 1..].iter().map(move |b| PairResult::compare(a, b)))
        .collect();
    Ok(ComparisonSet { results })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample(label: &str, values: &[f64]) -> Sample {
        Sample::new(label, values.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(compare_all(&[]).unwrap().is_empty());
        assert!(compare_all(&[sample("2019", &[1.0, 2.0])]).unwrap().is_empty());
    }

    #[test]
    fn test_pair_order() {
        let samples = [
            sample("2019", &[70.0, 75.0, 80.0]),
            sample("2022", &[85.0, 78.0, 92.0, 75.0, 88.0]),
            sample("2023", &[82.0, 76.0, 90.0, 80.0, 85.0]),
            sample("2024", &[88.0, 84.0, 91.0, 77.0, 83.0]),
        ];
        let set = compare_all(&samples).unwrap();
        let labels = set
            .results()
            .iter()
            .map(PairResult::pair_label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "2019 vs 2022",
                "2019 vs 2023",
                "2019 vs 2024",
                "2022 vs 2023",
                "2022 vs 2024",
                "2023 vs 2024",
            ]
        );
    }

    #[test]
    fn test_failed_pair_does_not_abort_others() {
        let samples = [
            sample("2019", &[60.0]),
            sample("2022", &[85.0, 78.0, 92.0, 75.0, 88.0]),
            sample("2023", &[82.0, 76.0, 90.0, 80.0, 85.0]),
        ];
        let set = compare_all(&samples).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.failures().count(), 2);
        for (result, err) in set.failures() {
            assert_eq!(result.label_a, "2019");
            assert!(!result.significant);
            assert_eq!(
                *err,
                StatsError::InvalidInput {
                    len: 1,
                    required: 2
                }
            );
        }
        let last = &set.results()[2];
        assert!(last.outcome.is_ok());
        assert!(!last.significant);
    }

    #[test]
    fn test_significant_flag() {
        let samples = [
            sample("low", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            sample("high", &[10.0, 11.0, 12.0, 13.0, 14.0]),
        ];
        let set = compare_all(&samples).unwrap();
        assert_eq!(set.significant().count(), 1);
    }

    #[test]
    fn test_duplicate_labels() {
        let samples = [sample("2022", &[1.0, 2.0]), sample("2022", &[3.0, 4.0])];
        assert_eq!(
            compare_all(&samples),
            Err(StatsError::DuplicateLabel {
                label: "2022".to_owned()
            })
        );
    }

    proptest! {
        #[test]
        fn pair_count_is_k_choose_2(
            groups in prop::collection::vec(prop::collection::vec(0.0f64..100.0, 0..8), 0..8),
        ) {
            let samples = groups
                .into_iter()
                .enumerate()
                .map(|(i, values)| Sample::new(i.to_string(), values).unwrap())
                .collect::<Vec<_>>();
            let k = samples.len();
            let set = compare_all(&samples).unwrap();
            prop_assert_eq!(set.len(), k * k.saturating_sub(1) / 2);

            let pairs = set
                .results()
                .iter()
                .map(|r| {
                    let mut pair = [r.label_a.clone(), r.label_b.clone()];
                    pair.sort();
                    pair
                })
                .collect::<HashSet<_>>();
            prop_assert_eq!(pairs.len(), set.len());
        }
    }
}
