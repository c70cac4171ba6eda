//! Per-year grade summary command
//!
//! Prints the figures behind the year-by-year box plots and the
//! average-grade chart.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use gradestat_analysis::summary::YearSummary;

use crate::{
    command::data::DataArg,
    schema::report::{SummaryReport, YearSummaryRow},
    util,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub data: DataArg,

    /// Also save the summaries as a JSON report to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let (samples, filter) = arg.data.load_samples()?;
    let summaries = YearSummary::from_samples(&samples);

    println!("Student Grades by Year");
    println!("======================\n");
    print_summary_table(&summaries);

    if let Some(path) = &arg.output {
        let report = SummaryReport {
            generated_at: Utc::now(),
            source: arg.data.data.display().to_string(),
            filter,
            years: summaries.iter().map(YearSummaryRow::from).collect(),
        };
        util::save_json_report(&report, path)?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary_table(summaries: &[YearSummary]) {
    println!(
        "  {:<10} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}  Outliers",
        "Year", "Count", "Mean", "Min", "Q1", "Median", "Q3", "Max",
    );
    println!("  {}", "-".repeat(84));
    for summary in summaries {
        println!("{}", format_summary_row(summary));
    }
}

fn format_summary_row(summary: &YearSummary) -> String {
    let (Some(stats), Some(box_plot)) = (&summary.stats, &summary.box_plot) else {
        return format!(
            "  {:<10} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            summary.label, summary.count, "N/A", "N/A", "N/A", "N/A", "N/A", "N/A",
        );
    };
    let outliers = box_plot
        .outliers
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "  {:<10} {:>6} {:>8.2} {:>8.1} {:>8.2} {:>8.2} {:>8.2} {:>8.1}  {}",
        summary.label,
        summary.count,
        stats.mean,
        stats.min,
        box_plot.q1,
        box_plot.median,
        box_plot.q3,
        stats.max,
        if outliers.is_empty() { "-" } else { outliers.as_str() },
    )
}
