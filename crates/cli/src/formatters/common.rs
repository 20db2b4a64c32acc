//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing/null value handling.
//! - Date rendering for table and CSV cells.
//! - Atomic file writing for rendered output and downloads.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::OutputFormat;

/// String representation for missing/null/empty values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

pub fn format_missing(opt: Option<&str>) -> &str {
    match opt {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_MISSING_VALUE,
    }
}

pub fn format_missing_display<T: std::fmt::Display>(opt: Option<T>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// `2025-03-01 14:30 UTC`
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

pub fn format_date(value: Option<&NaiveDate>) -> String {
    format_missing_display(value.map(|d| d.format("%Y-%m-%d")))
}

/// Join a list for one cell; an empty list is missing.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        items.join("; ")
    }
}

/// Write formatted output to `output_file` or stdout.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output.as_bytes(), path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Save a downloaded document.
pub fn write_bytes_to_file(content: &[u8], path: &Path) -> Result<()> {
    write_to_file(content, path)
        .with_context(|| format!("Failed to save download to {}", path.display()))?;
    eprintln!("Saved {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write to a temp file in the target directory, then rename over `path`.
fn write_to_file(content: &[u8], path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content)
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
