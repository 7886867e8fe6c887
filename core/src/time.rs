//! Time related utils.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic format: "20220313T072004Z"
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse a ISO 8601 basic formatted string, for example "20220313T072004Z".
///
/// The input must match the format exactly: separators, offsets and fields
/// without zero padding are rejected.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|t| t.and_utc())
        .map_err(|e| Error::unexpected(format!("parse {s} into iso8601 failed")).with_source(e))?;

    // chrono accepts single digit fields, which would not round trip.
    if format_iso8601(t) != s {
        return Err(Error::unexpected(format!(
            "parse {s} into iso8601 failed: not zero padded"
        )));
    }

    Ok(t)
}
