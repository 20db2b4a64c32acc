//! Serde helpers for the backend's loosely typed JSON.
//!
//! Responsibilities:
//! - Accept entity ids as either JSON strings (`"64f1..."`) or numbers (`42`).
//! - Accept counters as either numbers or numeric strings.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, business rules).
//!
//! Invariants / assumptions:
//! - Ids are opaque; numeric ids are rendered with `to_string()` and never parsed back.
//! - Errors are generic parse errors and never echo field values.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

impl StringOrNumber {
    fn into_id(self) -> String {
        match self {
            Self::String(s) => s,
            Self::U64(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
        }
    }
}

/// Deserialize an id that may be a string or a number.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_id)
}

/// Optional variant of [`id_from_string_or_number`].
pub fn opt_id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_id))
}

/// Deserialize a counter that may arrive as `12` or `"12"`. Null maps to 0.
pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNumber::U64(v)) => Ok(v),
        Some(StringOrNumber::I64(v)) => u64::try_from(v).map_err(D::Error::custom),
        Some(StringOrNumber::String(s)) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}
