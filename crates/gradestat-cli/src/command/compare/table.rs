//! Comparison table display
//!
//! Prints pairwise t-test results in a fixed-width table: t-statistics with
//! two decimals, p-values with five.

use gradestat_stats::{comparison::PairResult, ttest::SIGNIFICANCE_LEVEL};

const LABEL_WIDTH: usize = 20;

fn print_comparison_table_header() {
    println!(
        "  {:<LABEL_WIDTH$} {:>12} {:>10} {:>8} {:>12}",
        "Year Pair", "T-Statistic", "P-Value", "DF", "Significant",
    );
}

fn print_comparison_table_separator() {
    // label + t(12) + p(10) + df(8) + significant(12) + spaces(4)
    println!("  {}", "-".repeat(LABEL_WIDTH + 46));
}

/// Formats one result as a table row.
///
/// Rows whose test failed show `N/A` and the reason.
pub(super) fn format_comparison_row(result: &PairResult) -> String {
    let label = result.pair_label();
    match &result.outcome {
        Ok(test) => format!(
            "  {:<LABEL_WIDTH$} {:>12.2} {:>10.5} {:>8.2} {:>12}",
            label,
            test.t_statistic,
            test.p_value,
            test.degrees_of_freedom,
            if result.significant { "Yes" } else { "No" },
        ),
        Err(err) => format!(
            "  {:<LABEL_WIDTH$} {:>12} {:>10} {:>8} {:>12}  ({err})",
            label, "N/A", "N/A", "N/A", "N/A",
        ),
    }
}

/// Print a formatted comparison table
pub(super) fn print_comparison_table(results: &[PairResult]) {
    print_comparison_table_header();
    print_comparison_table_separator();
    for result in results {
        println!("{}", format_comparison_row(result));
    }
}

/// Print legend explaining table columns
pub(super) fn print_legend() {
    println!("Legend:");
    println!("  T-Statistic : Welch's t, positive when the first year has the higher mean");
    println!("  P-Value     : Two-tailed p-value");
    println!("  DF          : Welch-Satterthwaite degrees of freedom");
    println!("  Significant : Yes when P-Value < {SIGNIFICANCE_LEVEL}");
}
