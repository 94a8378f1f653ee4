use chrono::{DateTime, NaiveDateTime};
use thiserror::Error;

/// The provider's timestamp could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable timestamp: {0}")]
pub struct TimestampError(pub String);

/// Render an ISO-8601 timestamp as a short display string.
///
/// Open-Meteo emits naive minute-resolution timestamps (`2024-01-15T12:00`);
/// full RFC 3339 and second-resolution forms are accepted as well. The output
/// uses a fixed `YYYY-MM-DD HH:MM` layout, so repeated calls on the same
/// input are deterministic. A malformed input is a hard failure rather than
/// a silently-rendered placeholder.
pub fn format_datetime(iso: &str) -> Result<String, TimestampError> {
    let parsed = DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"))
        .map_err(|_| TimestampError(iso.to_owned()))?;

    Ok(parsed.format("%Y-%m-%d %H:%M").to_string())
}
