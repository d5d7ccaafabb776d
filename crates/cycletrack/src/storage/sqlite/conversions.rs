//! Conversions between domain types and SQLite rows.
//!
//! Dates are stored as ISO 8601 text, timestamps as RFC 3339 text, and the
//! date range columns as JSON arrays of ISO dates.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use uuid::Uuid;

use cycletrack_core::cycle::Cycle;

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn range_to_json(range: &[NaiveDate]) -> rusqlite::Result<String> {
    serde_json::to_string(range)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn conversion_failure(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn parse_uuid(idx: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_failure(idx, e))
}

fn parse_date(idx: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    s.parse().map_err(|e| conversion_failure(idx, e))
}

fn parse_datetime(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_failure(idx, e))
}

fn parse_range(idx: usize, s: &str) -> rusqlite::Result<Vec<NaiveDate>> {
    serde_json::from_str(s).map_err(|e| conversion_failure(idx, e))
}

/// Converts a row from one of the full-cycle SELECT statements into a Cycle.
///
/// Column order must match the SELECT statements in `schema`.
pub fn row_to_cycle(row: &rusqlite::Row<'_>) -> rusqlite::Result<Cycle> {
    Ok(Cycle {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        user_id: parse_uuid(1, &row.get::<_, String>(1)?)?,
        month: row.get(2)?,
        period_length: row.get::<_, i64>(3)? as u32,
        cycle_length: row.get::<_, i64>(4)? as u32,
        start_date: parse_date(5, &row.get::<_, String>(5)?)?,
        next_cycle_date: parse_date(6, &row.get::<_, String>(6)?)?,
        period_range: parse_range(7, &row.get::<_, String>(7)?)?,
        ovulation_range: parse_range(8, &row.get::<_, String>(8)?)?,
        unsafe_range: parse_range(9, &row.get::<_, String>(9)?)?,
        created_at: parse_datetime(10, &row.get::<_, String>(10)?)?,
        updated_at: parse_datetime(11, &row.get::<_, String>(11)?)?,
    })
}
