//! Record normalizer: timestamps and durations → grid coordinates.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::domain::{TaskRecord, TransformError};

/// Grid-addressable coordinates for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSlot {
    /// 0 = Monday .. 6 = Sunday.
    pub day: u8,
    /// Fractional hour of day, minutes retained (09:30 → 9.5).
    pub start_hour: f64,
    /// duration_minutes / 60, fractional retained.
    pub duration_hours: f64,
}

/// Parse one record into grid coordinates.
///
/// Fractional precision is kept here; the hour-bucketed legacy rendering
/// truncates at layout time, not at normalization time.
pub fn normalize(record: &TaskRecord) -> Result<GridSlot, TransformError> {
    if record.duration_minutes == 0 {
        return Err(TransformError::InvalidDuration {
            minutes: record.duration_minutes,
        });
    }

    let start = parse_wall_clock(&record.start_datetime)?;

    Ok(GridSlot {
        day: start.weekday().num_days_from_monday() as u8,
        start_hour: f64::from(start.hour()) + f64::from(start.minute()) / 60.0,
        duration_hours: f64::from(record.duration_minutes) / 60.0,
    })
}

/// Parse an ISO-8601 timestamp down to wall-clock time.
///
/// The service emits both offset-carrying ("2024-01-15T09:00:00+02:00") and
/// naive ("2024-01-15T09:00:00") timestamps. For grid placement the wall
/// clock in the written offset is what matters, so an RFC 3339 value keeps
/// its local representation instead of being shifted to UTC.
fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, TransformError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| TransformError::MalformedTimestamp {
            value: value.to_string(),
        })
}
