//! Conversion between Core Data timestamps and calendar values.
//!
//! Day One stores every date as floating-point seconds since
//! 2001-01-01T00:00:00Z (the Core Data reference date). Output values are
//! presented in the local timezone, and filter dates supplied as calendar
//! days are interpreted as local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{DayOneError, Result};

/// Seconds between the UNIX epoch and the Core Data reference date.
pub const CORE_DATA_EPOCH_OFFSET: i64 = 978_307_200;

/// Convert a raw Core Data timestamp into a local date-time.
///
/// Values outside the representable range saturate to the nearest bound.
pub fn to_local_time(raw: f64) -> DateTime<Local> {
    let unix = raw + CORE_DATA_EPOCH_OFFSET as f64;
    let secs = unix.floor();
    let nanos = (((unix - secs) * 1_000_000_000.0).round() as u32).min(999_999_999);

    let utc = DateTime::<Utc>::from_timestamp(secs as i64, nanos).unwrap_or(if secs < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    utc.with_timezone(&Local)
}

/// Convert a local calendar date-time into a raw Core Data timestamp.
///
/// Local times that fall into a DST gap do not exist and fail with
/// [`DayOneError::InvalidDate`]; ambiguous ones resolve to the earlier instant.
pub fn to_raw(naive: NaiveDateTime) -> Result<f64> {
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DayOneError::InvalidDate(format!("{} does not exist locally", naive)))?;
    Ok(datetime_to_raw(&local))
}

/// Convert any timezone-aware instant into a raw Core Data timestamp.
pub fn datetime_to_raw<Tz: TimeZone>(value: &DateTime<Tz>) -> f64 {
    let whole = (value.timestamp() - CORE_DATA_EPOCH_OFFSET) as f64;
    whole + f64::from(value.timestamp_subsec_nanos()) / 1_000_000_000.0
}

/// Raw timestamp of local midnight at the start of `date`.
pub fn date_to_raw(date: NaiveDate) -> Result<f64> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| DayOneError::InvalidDate(date.to_string()))?;
    to_raw(midnight)
}

/// Parse a `YYYY-MM-DD` filter date.
pub fn parse_filter_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| DayOneError::InvalidDate(format!("{}: {}", value, e)))
}
