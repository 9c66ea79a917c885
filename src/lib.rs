//! Solar position and sun-path sampling.
//!
//! Given an instant, an observer [`Coordinate`] and an IANA timezone, computes the
//! sun's apparent altitude and azimuth, and derives the progress values and sampled
//! polyline used to draw a day's sun path. Every function is pure and thread-safe.

pub mod angles;
pub mod ephemeris;
pub mod error;
pub mod refraction;
pub mod solar_path;
pub mod time;
pub mod types;

pub use angles::{
    calculate_sun_position, deg_to_rad, greenwich_mean_sidereal_time, horizontal_position,
    hour_angle, local_mean_sidereal_time, normalize_angle, normalize_radians, rad_to_deg,
    sun_position_with_zone, HorizontalPosition, DEGREES_PER_HOUR,
};

pub use ephemeris::{equatorial_position, EclipticPosition, EquatorialPosition};

pub use error::{CoreError, Result};

pub use refraction::{apparent_altitude, refraction_correction, refraction_regime, RefractionRegime};

pub use solar_path::{
    altitude_progress, calculate_solar_path, calculate_solar_path_with_config,
    find_true_solar_noon, generate_sun_path_samples, generate_sun_path_samples_with_config,
    project_sample, sun_progress, DEGENERATE_DAY_PROGRESS,
};

pub use time::{julian_century, julian_day, resolve_timezone, TimeZoneId};

pub use types::{
    Coordinate, DaySolarReference, NoonReference, PathLayout, PathSample, SolarPathConfig,
    SolarPathData, SunPosition, DEFAULT_POINT_COUNT,
};
