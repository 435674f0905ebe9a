//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the Unix epoch, as used by `oauth_timestamp`.
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}

/// Parse an RFC 3339 datetime, mostly used to pin the clock in tests.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| {
            crate::Error::invalid_input_type(format!("parse '{s}' into rfc3339 failed"))
                .with_source(e)
        })?
        .with_timezone(&Utc))
}
