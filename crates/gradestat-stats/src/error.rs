/// Errors raised by the statistical routines in this crate.
///
/// Comparisons over many samples never propagate these as a whole; each
/// failure is attached to the pair it belongs to (see
/// [`PairResult`](crate::comparison::PairResult)).
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// A sample is too small for the requested statistic.
    #[display("sample has {len} observation(s), at least {required} required")]
    InvalidInput { len: usize, required: usize },
    /// The standard error is zero while the means differ, so the t-statistic
    /// is unbounded.
    #[display("degenerate comparison: zero standard error with means {mean_a} and {mean_b}")]
    DegenerateComparison { mean_a: f64, mean_b: f64 },
    /// An observation is NaN or infinite.
    #[display("sample '{label}' has a non-finite value at index {index}")]
    NonFiniteValue { label: String, index: usize },
    /// Two samples passed to a pairwise comparison share a label.
    #[display("duplicate sample label '{label}'")]
    DuplicateLabel { label: String },
    /// The Student's t distribution could not be built for these degrees of freedom.
    #[display("invalid degrees of freedom: {df}")]
    InvalidDegreesOfFreedom { df: f64 },
}
