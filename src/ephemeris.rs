//! Low-precision solar ephemeris (Meeus, Astronomical Algorithms ch. 25).
//!
//! All polynomial inputs are Julian centuries since J2000.0. Constants are in the
//! units they are published in, so degree to radian conversion happens per formula.

use crate::angles::{deg_to_rad, normalize_angle, normalize_radians};

const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// 23°26′21.448″
pub const MEAN_OBLIQUITY_J2000: f64 = 23.0 + 26.0 / 60.0 + 21.448 / ARCSEC_PER_DEGREE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Degrees, [0, 360).
    pub mean_longitude: f64,
    /// Degrees, [0, 360).
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub obliquity: f64,
}

/// Sun's equatorial coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// [0, 2π)
    pub right_ascension: f64,
    pub declination: f64,
}

pub fn mean_longitude(t: f64) -> f64 {
    normalize_angle(280.46646 + t * (36000.76983 + t * 0.0003032))
}

pub fn mean_anomaly(t: f64) -> f64 {
    normalize_angle(357.52911 + t * (35999.05029 - t * 0.0001537))
}

/// `mean_anomaly` in degrees; result in degrees.
pub fn equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

pub fn true_longitude(mean_longitude: f64, equation_of_center: f64) -> f64 {
    mean_longitude + equation_of_center
}

/// Mean obliquity of the ecliptic in degrees.
pub fn obliquity_of_ecliptic(t: f64) -> f64 {
    let drift_arcsec = t * (46.8150 + t * (0.00059 - t * 0.001813));
    MEAN_OBLIQUITY_J2000 - drift_arcsec / ARCSEC_PER_DEGREE
}

pub fn ecliptic_position(t: f64) -> EclipticPosition {
    let l0 = mean_longitude(t);
    let m = mean_anomaly(t);
    let c = equation_of_center(t, m);
    EclipticPosition {
        mean_longitude: l0,
        mean_anomaly: m,
        equation_of_center: c,
        true_longitude: true_longitude(l0, c),
        obliquity: obliquity_of_ecliptic(t),
    }
}

pub fn equatorial_position(t: f64) -> EquatorialPosition {
    let ecliptic = ecliptic_position(t);
    let lambda = deg_to_rad(ecliptic.true_longitude);
    let epsilon = deg_to_rad(ecliptic.obliquity);

    let alpha = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    let delta = (epsilon.sin() * lambda.sin()).asin();

    EquatorialPosition {
        right_ascension: normalize_radians(alpha),
        declination: delta,
    }
}
