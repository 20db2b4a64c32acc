//! JSON formatter implementation.
//!
//! Pretty-printed JSON of the model as serde writes it, so field names match
//! the backend's camelCase.

use anyhow::Result;

use super::{Formatter, Rendered};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, records: &Rendered) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&records.json)?;
        output.push('\n');
        Ok(output)
    }
}
