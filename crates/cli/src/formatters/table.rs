//! Table formatter implementation.
//!
//! Lists become aligned columns under an upper-case header; a single record
//! becomes a `Field: value` list.

use anyhow::Result;

use super::{Formatter, Rendered};

/// Widest a column may grow before values are truncated.
const MAX_COLUMN_WIDTH: usize = 48;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, records: &Rendered) -> Result<String> {
        if records.single {
            return Ok(format_detail(records));
        }
        if records.rows.is_empty() {
            return Ok(format!("No {} found.\n", records.kind));
        }
        Ok(format_rows(records))
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn format_rows(records: &Rendered) -> String {
    let mut widths: Vec<usize> = records.headers.iter().map(|h| h.chars().count()).collect();
    for row in &records.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count()).min(MAX_COLUMN_WIDTH);
        }
    }

    let mut output = String::new();
    let header: Vec<String> = records
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h.to_uppercase(), w = *w))
        .collect();
    output.push_str(header.join("  ").trim_end());
    output.push('\n');

    let underline: Vec<String> = widths.iter().map(|w| "=".repeat(*w)).collect();
    output.push_str(&underline.join("  "));
    output.push('\n');

    for row in &records.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", truncate(cell, *w), w = *w))
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    }
    output
}

fn format_detail(records: &Rendered) -> String {
    let label_width = records
        .headers
        .iter()
        .map(|h| h.chars().count())
        .max()
        .unwrap_or(0);
    let mut output = String::new();
    if let Some(row) = records.rows.first() {
        for (header, value) in records.headers.iter().zip(row) {
            output.push_str(&format!(
                "{:<w$}  {}\n",
                format!("{header}:"),
                value,
                w = label_width + 1
            ));
        }
    }
    output
}
