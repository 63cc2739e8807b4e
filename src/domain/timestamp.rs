//! Tolerant timestamp comparison.
//!
//! Seed and upstream rows carry `createdAt` as strings in more than one
//! format, so ordering compares parsed date values rather than the raw text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::cmp::Ordering;

/// Parse a timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (with offset or trailing `Z`), a naive datetime
/// (`YYYY-MM-DDTHH:MM:SS` with optional fractional seconds, `T` or space
/// separated), or a bare calendar date taken as midnight UTC. Returns `None`
/// for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

/// Ordering for a descending-by-timestamp sort.
///
/// Newest first; unparseable values sort after every parseable one. Callers
/// use this with a stable sort so equal timestamps keep their source order.
pub fn cmp_created_at_desc(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
