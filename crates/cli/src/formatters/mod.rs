//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the output formats: Table, JSON and CSV.
//! - Turn dashboard models into rows via the [`Record`] trait.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - Formatters return strings; only `output_result` touches stdout or files.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | CSV | Headers only, no data | `ID,Name\n` |
//! | Table | Human message | `No teams found.` |
//!
//! ## Missing/Null Value Handling
//!
//! JSON keeps `null`/absent fields as serde writes them. Table and CSV print
//! `common::DEFAULT_MISSING_VALUE`.

use anyhow::Result;
use serde::Serialize;

mod common;
mod csv;
mod json;
mod records;
mod table;

pub use common::{output_result, write_bytes_to_file};
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// A model that can be shown as one row of a table or CSV file.
pub trait Record: Serialize {
    /// Plural noun used in the empty-table message ("No teams found.").
    const KIND: &'static str;

    /// Column labels, in the order `cells` returns values.
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Records ready for rendering in any format.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub kind: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    pub json: serde_json::Value,
    /// A single item is shown as a field list rather than a table.
    pub single: bool,
}

impl Rendered {
    pub fn list<R: Record>(items: &[R]) -> Result<Self> {
        Ok(Self {
            kind: R::KIND,
            headers: R::headers(),
            rows: items.iter().map(Record::cells).collect(),
            json: serde_json::to_value(items)?,
            single: false,
        })
    }

    pub fn single<R: Record>(item: &R) -> Result<Self> {
        Ok(Self {
            kind: R::KIND,
            headers: R::headers(),
            rows: vec![item.cells()],
            json: serde_json::to_value(item)?,
            single: true,
        })
    }
}

/// Renders [`Rendered`] records as text.
pub trait Formatter {
    fn format(&self, records: &Rendered) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::rows;
    use super::*;

    #[test]
    fn test_rendered_list_keeps_order_and_json() {
        let rendered = Rendered::list(&rows()).unwrap();
        assert_eq!(rendered.rows.len(), 2);
        assert_eq!(rendered.rows[1][0], "22");
        assert_eq!(rendered.json[0]["name"], "Alpha");
        assert!(!rendered.single);
    }

    #[test]
    fn test_rendered_single() {
        let rendered = Rendered::single(&rows()[0]).unwrap();
        assert!(rendered.single);
        assert_eq!(rendered.json["id"], "1");
    }
}
