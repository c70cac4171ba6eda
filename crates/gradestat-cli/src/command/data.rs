//! Input and filter arguments shared by the subcommands

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use gradestat_analysis::{
    dataset::{GradeRecord, QuestionType},
    filter::FilterConfig,
    grouping,
};
use gradestat_stats::sample::Sample;

use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DataFormat {
    /// A JSON list of grade records
    #[default]
    Records,
    /// A JSON object `{"data": {"<year>": [grades...]}}`
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum QuestionTypeArg {
    Closed,
    OpenEnded,
}

impl From<QuestionTypeArg> for QuestionType {
    fn from(value: QuestionTypeArg) -> Self {
        match value {
            QuestionTypeArg::Closed => QuestionType::Closed,
            QuestionTypeArg::OpenEnded => QuestionType::OpenEnded,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArg {
    /// JSON file with a base filter configuration (flags below override it)
    #[arg(long)]
    pub filter_config: Option<PathBuf>,

    /// Keep only this gender (e.g. "Male", "Female")
    #[arg(long)]
    pub gender: Option<String>,

    /// Keep only this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Lowest attendance frequency to keep (inclusive)
    #[arg(long)]
    pub min_frequency: Option<f64>,

    /// Highest attendance frequency to keep (inclusive)
    #[arg(long)]
    pub max_frequency: Option<f64>,

    /// Keep only this question type
    #[arg(long, value_enum)]
    pub question_type: Option<QuestionTypeArg>,

    /// Years to compare, in order (comma-separated); defaults to every year in the data
    #[arg(long, value_delimiter = ',')]
    pub years: Option<Vec<String>>,
}

impl FilterArg {
    /// Build the effective filter configuration
    ///
    /// Starts from `--filter-config` (or the defaults) and applies each flag
    /// given on the command line on top of it.
    pub(crate) fn to_config(&self) -> anyhow::Result<FilterConfig> {
        let mut config = match &self.filter_config {
            Some(path) => util::read_filter_config_file(path)?,
            None => FilterConfig::default(),
        };
        if let Some(gender) = &self.gender {
            config.gender = Some(gender.clone());
        }
        if let Some(topic) = &self.topic {
            config.topic = Some(topic.clone());
        }
        if let Some(min) = self.min_frequency {
            config.frequency_range.min = min;
        }
        if let Some(max) = self.max_frequency {
            config.frequency_range.max = max;
        }
        if let Some(question_type) = self.question_type {
            config.question_type = Some(question_type.into());
        }
        if let Some(years) = &self.years {
            config.years = Some(years.clone());
        }
        config.validate().context("Invalid filter configuration")?;
        tracing::debug!(?config, "effective filter");
        Ok(config)
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct DataArg {
    /// Path to the grades JSON file
    pub data: PathBuf,

    /// Layout of the grades file
    #[arg(long, value_enum, default_value_t)]
    pub format: DataFormat,

    #[clap(flatten)]
    pub filter: FilterArg,
}

impl DataArg {
    /// Load the grade file and turn it into per-year samples
    ///
    /// Returns the samples together with the filter that produced them.
    pub(crate) fn load_samples(&self) -> anyhow::Result<(Vec<Sample>, FilterConfig)> {
        let config = self.filter.to_config()?;
        let samples = match self.format {
            DataFormat::Records => {
                let records = load_filtered_records(&self.data, &config)?;
                grouping::group_by_year(&records, config.years.as_deref())
                    .context("Failed to group grades by year")?
            }
            DataFormat::Years => {
                let row_filter = FilterConfig {
                    years: None,
                    ..config.clone()
                };
                if row_filter != FilterConfig::default() {
                    bail!("record filters need per-record data; use --format records");
                }
                util::read_year_samples_file(&self.data)?
                    .to_samples(config.years.as_deref())
                    .context("Failed to build year samples")?
            }
        };
        Ok((samples, config))
    }
}

/// Load a grade record file and keep the rows matching `config`
pub(crate) fn load_filtered_records(
    path: &Path,
    config: &FilterConfig,
) -> anyhow::Result<Vec<GradeRecord>> {
    let dataset = util::read_records_file(path)?;
    config
        .apply(&dataset.records)
        .context("Failed to filter grade records")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        data: DataArg,
    }

    #[test]
    fn test_flags_build_filter() {
        let cli = TestCli::parse_from([
            "test",
            "grades.json",
            "--gender",
            "Female",
            "--min-frequency",
            "0.25",
            "--question-type",
            "open-ended",
            "--years",
            "2019,2023",
        ]);
        let config = cli.data.filter.to_config().unwrap();
        assert_eq!(config.gender.as_deref(), Some("Female"));
        assert_eq!(config.topic, None);
        assert_eq!(config.frequency_range.min, 0.25);
        assert_eq!(config.frequency_range.max, 1.0);
        assert_eq!(config.question_type, Some(QuestionType::OpenEnded));
        assert_eq!(
            config.years,
            Some(vec!["2019".to_owned(), "2023".to_owned()])
        );
        assert_eq!(cli.data.format, DataFormat::Records);
    }

    #[test]
    fn test_inverted_frequency_is_rejected() {
        let cli = TestCli::parse_from([
            "test",
            "grades.json",
            "--min-frequency",
            "0.9",
            "--max-frequency",
            "0.1",
        ]);
        assert!(cli.data.filter.to_config().is_err());
    }
}
