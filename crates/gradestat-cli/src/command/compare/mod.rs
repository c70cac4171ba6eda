//! Pairwise year comparison command
//!
//! Groups the (filtered) grades by year and runs Welch's t-test between
//! every pair of years.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use gradestat_stats::comparison::{self, ComparisonSet};

use crate::{
    command::data::DataArg,
    schema::report::{ComparisonReport, ComparisonRow},
    util,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CompareArg {
    #[clap(flatten)]
    pub data: DataArg,

    /// Also save the results as a JSON report to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CompareArg) -> anyhow::Result<()> {
    let (samples, filter) = arg.data.load_samples()?;
    let comparisons =
        comparison::compare_all(&samples).context("Failed to compare year samples")?;
    log_failures(&comparisons);

    println!("Statistical Analysis: T-tests");
    println!("=============================\n");
    for sample in &samples {
        println!("  {:<10} {:>6} grades", sample.label(), sample.len());
    }
    println!();

    table::print_legend();
    println!();
    table::print_comparison_table(comparisons.results());

    if let Some(path) = &arg.output {
        let report = ComparisonReport {
            generated_at: Utc::now(),
            source: arg.data.data.display().to_string(),
            filter,
            comparisons: comparisons.results().iter().map(ComparisonRow::from).collect(),
        };
        util::save_json_report(&report, path)?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}

fn log_failures(comparisons: &ComparisonSet) {
    for (result, err) in comparisons.failures() {
        tracing::warn!(pair = %result.pair_label(), error = %err, "t-test undefined");
    }
}
