//! Timestamp formatting shared by the data file and the API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serializes as RFC 3339 with exactly three fractional digits and a `Z`
/// suffix, e.g. `2024-05-01T12:00:00.000Z`.
pub fn serialize_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
