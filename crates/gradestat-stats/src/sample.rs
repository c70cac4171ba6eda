use crate::error::StatsError;

/// A labeled, immutable sequence of observations.
///
/// Samples of any length can be built; statistics that need more
/// observations report [`StatsError::InvalidInput`] when they are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    values: Vec<f64>,
}

impl Sample {
    /// Creates a sample, rejecting NaN and infinite observations.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gradestat_stats::sample::Sample;
    /// let sample = Sample::new("2022", vec![85.0, 78.0, 92.0]).unwrap();
    /// assert_eq!(sample.label(), "2022");
    /// assert_eq!(sample.len(), 3);
    ///
    /// assert!(Sample::new("bad", vec![1.0, f64::NAN]).is_err());
    /// ```
    pub fn new<L>(label: L, values: Vec<f64>) -> Result<Self, StatsError>
    where
        L: Into<String>,
    {
        let label = label.into();
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { label, index });
        }
        Ok(Self { label, values })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
