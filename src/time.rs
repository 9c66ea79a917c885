//! Calendar resolution and Julian Day conversion.
//!
//! The Julian Day is anchored on the *local* civil date in the observer's zone while its
//! fractional part carries the UTC time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, Result};

pub const J2000_EPOCH: f64 = 2451545.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// A resolved IANA timezone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZoneId(Tz);

impl TimeZoneId {
    pub fn tz(&self) -> Tz {
        self.0
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl FromStr for TimeZoneId {
    type Err = CoreError;

    fn from_str(id: &str) -> Result<Self> {
        id.parse::<Tz>()
            .map(TimeZoneId)
            .map_err(|_| CoreError::timezone_resolution(id))
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        TimeZoneId(tz)
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves an IANA identifier such as `"America/Los_Angeles"`.
///
/// # Errors
/// Returns `TimezoneResolution` when the identifier is unknown. No fallback zone is used.
pub fn resolve_timezone(id: &str) -> Result<TimeZoneId> {
    id.parse::<TimeZoneId>().inspect_err(|_| {
        log::debug!("timezone identifier {id:?} did not resolve");
    })
}

pub fn local_calendar_date(instant: &DateTime<Utc>, zone: TimeZoneId) -> (i32, u32, u32) {
    let local = instant.with_timezone(&zone.tz());
    (local.year(), local.month(), local.day())
}

/// UTC time of day as decimal hours, including sub-second precision.
pub fn utc_hours(instant: &DateTime<Utc>) -> f64 {
    instant.hour() as f64
        + instant.minute() as f64 / 60.0
        + (instant.second() as f64 + instant.nanosecond() as f64 * 1e-9) / 3600.0
}

/// Gregorian Julian Day for a calendar date plus a day fraction.
///
/// January and February count as months 13 and 14 of the previous year.
pub fn julian_day_from_parts(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
        + day_fraction
}

pub fn julian_day(instant: &DateTime<Utc>, zone: TimeZoneId) -> f64 {
    let (year, month, day) = local_calendar_date(instant, zone);
    julian_day_from_parts(year, month, day, utc_hours(instant) / 24.0)
}

pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_EPOCH) / DAYS_PER_CENTURY
}
