//! CSV export and import of grade records
//!
//! The CSV always starts with a header row of the record field names
//! ([`CSV_HEADER`]), even with no records. Writing then reading a record list
//! reproduces it exactly.
//!
//! # Examples
//!
//! ```
//! use gradestat_analysis::{
//!     dataset::{GradeRecord, QuestionType},
//!     export::{read_csv, write_csv},
//! };
//!
//! let records = vec![GradeRecord {
//!     semester: "2019.1".to_owned(),
//!     gender: "Male".to_owned(),
//!     topic: "SE Introduction".to_owned(),
//!     frequency: 0.8,
//!     open_ended: QuestionType::Closed,
//!     grade: 6.5,
//! }];
//!
//! let mut buf: Vec<u8> = Vec::new();
//! write_csv(&records, &mut buf).unwrap();
//! assert!(buf.starts_with(b"semester,gender,topic,frequency,open_ended,grade\n"));
//! assert_eq!(read_csv(buf.as_slice()).unwrap(), records);
//! ```

use std::io;

use crate::dataset::GradeRecord;

/// Column names of the CSV header, in record field order.
pub const CSV_HEADER: [&str; 6] = [
    "semester",
    "gender",
    "topic",
    "frequency",
    "open_ended",
    "grade",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    #[display("failed to write CSV header")]
    Header { source: csv::Error },
    #[display("failed to write CSV record {index}")]
    Write { index: usize, source: csv::Error },
    #[display("failed to flush CSV output")]
    Flush { source: io::Error },
    #[display("failed to read CSV record {index}")]
    Read { index: usize, source: csv::Error },
}

/// Writes `records` as CSV.
///
/// The header row is written even when there are no records.
pub fn write_csv<'a, I, W>(records: I, writer: W) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a GradeRecord>,
    W: io::Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer
        .write_record(CSV_HEADER)
        .map_err(|source| ExportError::Header { source })?;
    let mut count = 0;
    for (index, record) in records.into_iter().enumerate() {
        writer
            .serialize(record)
            .map_err(|source| ExportError::Write { index, source })?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|source| ExportError::Flush { source })?;
    tracing::debug!(records = count, "wrote CSV");
    Ok(())
}

/// Reads records from CSV with a header row.
pub fn read_csv<R>(reader: R) -> Result<Vec<GradeRecord>, ExportError>
where
    R: io::Read,
{
    csv::Reader::from_reader(reader)
        .deserialize()
        .enumerate()
        .map(|(index, record)| record.map_err(|source| ExportError::Read { index, source }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QuestionType;

    fn records() -> Vec<GradeRecord> {
        vec![
            GradeRecord {
                semester: "2019.1".to_owned(),
                gender: "Female".to_owned(),
                topic: "Software Procesess and Agile Methods".to_owned(),
                frequency: 0.333_333_333_333_333_3,
                open_ended: QuestionType::OpenEnded,
                grade: 7.25,
            },
            GradeRecord {
                semester: "2023.2".to_owned(),
                gender: "Male".to_owned(),
                topic: "Requirements, \"Use Cases\"".to_owned(),
                frequency: 1.0,
                open_ended: QuestionType::Closed,
                grade: 0.1,
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let records = records();
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        assert_eq!(read_csv(buf.as_slice()).unwrap(), records);
    }

    #[test]
    fn test_quoting_of_special_characters() {
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&records()[1..], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(r#""Requirements, ""Use Cases""""#));
        assert!(text.contains(",0,"));
    }

    #[test]
    fn test_empty_export_keeps_header() {
        let records: [GradeRecord; 0] = [];
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        assert_eq!(buf, b"semester,gender,topic,frequency,open_ended,grade\n");
        assert!(read_csv(buf.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn test_header_written_once() {
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("semester,gender").count(), 1);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_invalid_row_reports_index() {
        let csv = "semester,gender,topic,frequency,open_ended,grade\n\
                   2019.1,Male,Implementation,0.5,0,7\n\
                   2019.1,Male,Implementation,0.5,7,7\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Read { index: 1, .. }));
    }
}
