//! Time utilities: timestamp storage format, parsing and elapsed-time formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};

/// Storage format for `created_at` / `closed_at` (sorts lexicographically).
pub const DB_TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn to_db(ts: NaiveDateTime) -> String {
    ts.format(DB_TIMESTAMP_FMT).to_string()
}

pub fn from_db(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Render a duration the short way: `Xh` from one hour up, `Xm` from one
/// minute up, `Xs` otherwise. Units are rounded half to even.
pub fn format_elapsed(seconds: i64) -> String {
    let secs = seconds.max(0) as f64;
    let minutes = secs / 60.0;
    let hours = minutes / 60.0;

    if hours >= 1.0 {
        format!("{}h", hours.round_ties_even() as i64)
    } else if minutes >= 1.0 {
        format!("{}m", minutes.round_ties_even() as i64)
    } else {
        format!("{}s", secs as i64)
    }
}
