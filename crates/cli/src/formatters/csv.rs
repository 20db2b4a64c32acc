//! CSV formatter implementation.
//!
//! RFC 4180 output via the `csv` crate: one header row, then one row per
//! record. A single record is written the same way as a list of one.

use anyhow::{Context, Result};

use super::{Formatter, Rendered};

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, records: &Rendered) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(records.headers)?;
        for row in &records.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::test_support::{Row, rows};

    #[test]
    fn test_empty_list_is_headers_only() {
        let output = CsvFormatter
            .format(&Rendered::list::<Row>(&[]).unwrap())
            .unwrap();
        assert_eq!(output, "ID,Name,Note\n");
    }

    #[test]
    fn test_quotes_commas_and_quotes() {
        let output = CsvFormatter
            .format(&Rendered::list(&rows()).unwrap())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "1,Alpha,N/A");
        assert_eq!(lines[2], "22,\"Beta, Gamma\",\"said \"\"hi\"\"\"");
    }

    #[test]
    fn test_output_parses_back() {
        let output = CsvFormatter
            .format(&Rendered::list(&rows()).unwrap())
            .unwrap();
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let names: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta, Gamma"]);
    }
}
