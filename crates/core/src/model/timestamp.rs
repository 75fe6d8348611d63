//! Lenient parsing for server timestamps.
//!
//! The services emit either RFC 3339 strings or naive ISO-8601 values without
//! an offset. Anything unparseable becomes `None` instead of failing the whole
//! record.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a timestamp string into a naive UTC value.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// `deserialize_with` adapter for optional timestamps.
///
/// # Errors
///
/// Only fails when the value is neither null nor a string.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
