use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{compare::CompareArg, export::ExportArg, summary::SummaryArg};

mod compare;
mod data;
mod export;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log progress to stderr (`RUST_LOG` overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run Welch's t-tests between every pair of years
    Compare(#[clap(flatten)] CompareArg),
    /// Summarize grades per year (box plot and mean)
    Summary(#[clap(flatten)] SummaryArg),
    /// Export filtered grade records as CSV
    Export(#[clap(flatten)] ExportArg),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Compare(arg) => compare::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Export(arg) => export::run(&arg)?,
    }
    Ok(())
}
