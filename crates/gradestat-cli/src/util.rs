use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use gradestat_analysis::{
    dataset::{GradeDataset, YearSamples},
    filter::FilterConfig,
};

/// Where the CSV export goes: stdout or a file.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Save a report as pretty-printed JSON
pub fn save_json_report<T>(report: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
    Ok(())
}

fn open_input(file_kind: &str, path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Read a grade record list from a JSON file
pub fn read_records_file(path: &Path) -> anyhow::Result<GradeDataset> {
    GradeDataset::from_reader(open_input("grade records", path)?)
        .with_context(|| format!("Failed to parse grade records file: {}", path.display()))
}

/// Read grades grouped by year from a JSON file
pub fn read_year_samples_file(path: &Path) -> anyhow::Result<YearSamples> {
    YearSamples::from_reader(open_input("year samples", path)?)
        .with_context(|| format!("Failed to parse year samples file: {}", path.display()))
}

/// Read a filter configuration from a JSON file
pub fn read_filter_config_file(path: &Path) -> anyhow::Result<FilterConfig> {
    serde_json::from_reader(open_input("filter config", path)?)
        .with_context(|| format!("Failed to parse filter config file: {}", path.display()))
}
