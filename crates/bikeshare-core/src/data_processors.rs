use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

// ── TimestampProcessor ────────────────────────────────────────────────────────

/// Parses the start/end timestamps found in the city CSV files.
///
/// Trip times are local wall-clock times, so parsing yields a
/// [`NaiveDateTime`] and never shifts the hour.
pub struct TimestampProcessor;

impl TimestampProcessor {
    /// Attempt to parse `s` into a [`NaiveDateTime`].
    ///
    /// Handles the `"%Y-%m-%d %H:%M:%S"` form used by the bikeshare exports,
    /// ISO 8601 variants with a `T` separator or fractional seconds, and
    /// RFC 3339 strings (the offset is dropped, the wall-clock time is kept).
    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        const FORMATS: &[&str] = &[
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
            "%m/%d/%Y %H:%M:%S",
            "%m/%d/%Y %H:%M",
        ];

        for fmt in FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(naive);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }

        // Date-only values are taken as midnight.
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }

        warn!("TimestampProcessor: could not parse timestamp \"{}\"", s);
        None
    }
}
