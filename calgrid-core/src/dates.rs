//! Parsing for user-supplied dates.
//!
//! Everything here runs at the input boundary. The evaluation core only
//! ever sees dates that parsed successfully.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{CalGridError, CalGridResult};

/// Parse `YYYY-MM-DD` into a calendar date.
pub fn parse_date(s: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CalGridError::InvalidDate(s.to_string()))
}

/// Parse an event timestamp: `YYYY-MM-DDTHH:MM`, or a bare `YYYY-MM-DD`
/// taken as midnight.
pub fn parse_datetime(s: &str) -> CalGridResult<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt.and_utc());
    }

    let date = parse_date(s)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| CalGridError::InvalidMonth(s.to_string()))
}

/// Parse a weekday name or abbreviation into a 0 = Sunday .. 6 = Saturday
/// index.
pub fn parse_weekday(s: &str) -> CalGridResult<u8> {
    match s.trim().to_lowercase().as_str() {
        "sun" | "sunday" => Ok(0),
        "mon" | "monday" => Ok(1),
        "tue" | "tues" | "tuesday" => Ok(2),
        "wed" | "wednesday" => Ok(3),
        "thu" | "thur" | "thurs" | "thursday" => Ok(4),
        "fri" | "friday" => Ok(5),
        "sat" | "saturday" => Ok(6),
        _ => Err(CalGridError::InvalidWeekday(s.to_string())),
    }
}
