use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};

use crate::ephemeris;
use crate::error::Result;
use crate::refraction;
use crate::time::{self, TimeZoneId, J2000_EPOCH};
use crate::types::{Coordinate, SunPosition};

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const HOURS_PER_DAY: f64 = 24.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Wraps degrees into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to the modulus itself
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps radians into [0, 2π).
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Greenwich mean sidereal time in hours (not reduced to a single day).
pub fn greenwich_mean_sidereal_time(jd: f64, utc_hours: f64) -> f64 {
    6.697374558 + 0.06570982441908 * (jd - J2000_EPOCH) + 1.00273790935 * utc_hours
}

/// Local mean sidereal time in hours, [0, 24).
pub fn local_mean_sidereal_time(gmst: f64, longitude: f64) -> f64 {
    (gmst + longitude / DEGREES_PER_HOUR).rem_euclid(HOURS_PER_DAY)
}

/// Hour angle in radians. Not wrapped; only its trigonometric functions are used downstream.
pub fn hour_angle(jd: f64, longitude: f64, right_ascension: f64, utc_hours: f64) -> f64 {
    let gmst = greenwich_mean_sidereal_time(jd, utc_hours);
    let lmst = local_mean_sidereal_time(gmst, longitude);
    deg_to_rad(lmst * DEGREES_PER_HOUR) - right_ascension
}

/// Geometric horizontal coordinates in radians, azimuth clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

pub fn horizontal_position(latitude: f64, declination: f64, hour_angle: f64) -> HorizontalPosition {
    let sin_alt =
        latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin();

    // atan2 here measures from south; shift by π to measure from north.
    let azimuth_south = hour_angle
        .sin()
        .atan2(hour_angle.cos() * latitude.sin() - declination.tan() * latitude.cos());

    HorizontalPosition {
        altitude,
        azimuth: normalize_radians(azimuth_south + PI),
    }
}

/// Apparent sun position for an already-resolved zone.
pub fn sun_position_with_zone(
    instant: &DateTime<Utc>,
    coordinate: Coordinate,
    zone: TimeZoneId,
) -> SunPosition {
    let jd = time::julian_day(instant, zone);
    let t = time::julian_century(jd);
    let utc_hours = time::utc_hours(instant);

    let equatorial = ephemeris::equatorial_position(t);
    let ha = hour_angle(
        jd,
        coordinate.longitude(),
        equatorial.right_ascension,
        utc_hours,
    );
    let geometric = horizontal_position(
        deg_to_rad(coordinate.latitude()),
        equatorial.declination,
        ha,
    );

    SunPosition {
        altitude: refraction::apparent_altitude(rad_to_deg(geometric.altitude)),
        azimuth: normalize_angle(rad_to_deg(geometric.azimuth)),
    }
}

/// Computes the apparent altitude and azimuth of the sun.
///
/// `timezone_id` must be an IANA identifier; it fixes the civil date the Julian Day
/// is anchored on.
///
/// # Errors
/// Returns `TimezoneResolution` if `timezone_id` is unknown.
pub fn calculate_sun_position(
    instant: &DateTime<Utc>,
    coordinate: Coordinate,
    timezone_id: &str,
) -> Result<SunPosition> {
    let zone = time::resolve_timezone(timezone_id)?;
    Ok(sun_position_with_zone(instant, coordinate, zone))
}
