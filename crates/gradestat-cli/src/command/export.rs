//! CSV export command
//!
//! Writes the grade records passing the filter as CSV, to a file or stdout.
//! With `--years`, only records from those years are written.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gradestat_analysis::export;

use crate::{
    command::data::{FilterArg, load_filtered_records},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExportArg {
    /// Path to the grade records JSON file
    pub data: PathBuf,

    #[clap(flatten)]
    pub filter: FilterArg,

    /// Output CSV file (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExportArg) -> anyhow::Result<()> {
    let config = arg.filter.to_config()?;
    let mut records = load_filtered_records(&arg.data, &config)?;
    if let Some(years) = &config.years {
        records.retain(|r| years.iter().any(|y| r.semester.starts_with(y.as_str())));
    }

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    export::write_csv(&records, &mut output)
        .with_context(|| format!("Failed to write CSV to {}", output.display_path()))?;

    if let Output::File { path, .. } = &output {
        println!("Exported {} records to {}", records.len(), path.display());
    }
    Ok(())
}
