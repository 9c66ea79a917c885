use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;

use crate::angles::{self, deg_to_rad, rad_to_deg, sun_position_with_zone};
use crate::ephemeris;
use crate::error::Result;
use crate::time::{self, TimeZoneId};
use crate::types::{
    duration_seconds, Coordinate, DaySolarReference, NoonReference, PathLayout, PathSample,
    SolarPathConfig, SolarPathData, SunPosition,
};

/// Progress reported when sunset does not follow sunrise (polar day or night).
pub const DEGENERATE_DAY_PROGRESS: f64 = 0.5;

const SECONDS_PER_DAY: f64 = 86400.0;
const NOON_SEARCH_MAX_ITERATIONS: usize = 8;
const NOON_SEARCH_TOLERANCE_SECONDS: f64 = 1.0;

/// Elapsed fraction of the daylight window, clamped to [0, 1].
///
/// Returns [`DEGENERATE_DAY_PROGRESS`] when `sunset <= sunrise` rather than dividing
/// by a zero or negative duration.
pub fn sun_progress(instant: &DateTime<Utc>, day: &DaySolarReference) -> f64 {
    if !day.is_regular() {
        return DEGENERATE_DAY_PROGRESS;
    }
    let elapsed = duration_seconds(*instant - day.sunrise);
    (elapsed / day.daylight_seconds()).clamp(0.0, 1.0)
}

/// Current altitude relative to the day's peak, clamped to [0, 1]; zero when the peak
/// is at or below the horizon.
pub fn altitude_progress(current_altitude: f64, max_daily_altitude: f64) -> f64 {
    if max_daily_altitude <= 0.0 {
        return 0.0;
    }
    (current_altitude / max_daily_altitude).clamp(0.0, 1.0)
}

/// Maps a sample into drawing space.
///
/// Height follows `sin(altitude) / sin(max_altitude)` so the arc flattens near noon and
/// steepens near the horizon the way the real sun does.
pub fn project_sample(
    sun_progress: f64,
    altitude: f64,
    max_altitude: f64,
    layout: &PathLayout,
) -> (f64, f64) {
    let x = layout.inset_left + (layout.inset_right - layout.inset_left) * sun_progress;
    let height_ratio = if max_altitude > 0.0 {
        deg_to_rad(altitude).sin() / deg_to_rad(max_altitude).sin()
    } else {
        0.0
    };
    let y = (layout.baseline - layout.available_height * height_ratio).max(layout.top_margin);
    (x, y)
}

fn hour_angle_degrees(instant: &DateTime<Utc>, coordinate: Coordinate, zone: TimeZoneId) -> f64 {
    let jd = time::julian_day(instant, zone);
    let equatorial = ephemeris::equatorial_position(time::julian_century(jd));
    let ha = angles::hour_angle(
        jd,
        coordinate.longitude(),
        equatorial.right_ascension,
        time::utc_hours(instant),
    );
    // [-180, 180)
    angles::normalize_angle(rad_to_deg(ha) + 180.0) - 180.0
}

/// Searches for the instant the sun crosses the local meridian, starting from `estimate`.
pub fn find_true_solar_noon(
    coordinate: Coordinate,
    zone: TimeZoneId,
    estimate: DateTime<Utc>,
) -> DateTime<Utc> {
    let mut noon = estimate;
    for _ in 0..NOON_SEARCH_MAX_ITERATIONS {
        let shift_seconds = -hour_angle_degrees(&noon, coordinate, zone) / 360.0 * SECONDS_PER_DAY;
        noon += Duration::milliseconds((shift_seconds * 1000.0).round() as i64);
        if shift_seconds.abs() < NOON_SEARCH_TOLERANCE_SECONDS {
            break;
        }
    }
    noon
}

/// Per-day positions shared by every instant evaluated against the same day.
struct DayPositions {
    sunrise: SunPosition,
    solar_noon: SunPosition,
    sunset: SunPosition,
    true_solar_noon: DateTime<Utc>,
}

impl DayPositions {
    fn compute(
        coordinate: Coordinate,
        zone: TimeZoneId,
        day: &DaySolarReference,
        noon_reference: NoonReference,
    ) -> Self {
        if !day.is_regular() {
            log::debug!(
                "sunset {} does not follow sunrise {}; using neutral progress",
                day.sunset,
                day.sunrise
            );
        }
        let true_solar_noon = find_true_solar_noon(coordinate, zone, day.solar_noon);
        let peak_instant = match noon_reference {
            NoonReference::Supplied => day.solar_noon,
            NoonReference::TrueSolarNoon => true_solar_noon,
        };
        Self {
            sunrise: sun_position_with_zone(&day.sunrise, coordinate, zone),
            solar_noon: sun_position_with_zone(&peak_instant, coordinate, zone),
            sunset: sun_position_with_zone(&day.sunset, coordinate, zone),
            true_solar_noon,
        }
    }

    fn max_altitude(&self) -> f64 {
        self.solar_noon.altitude
    }
}

/// Computes the current sun position together with the day's reference positions and
/// progress ratios, using the supplied solar noon as the daily peak.
///
/// # Errors
/// Returns `TimezoneResolution` if `timezone_id` is unknown.
pub fn calculate_solar_path(
    instant: &DateTime<Utc>,
    coordinate: Coordinate,
    timezone_id: &str,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    solar_noon: DateTime<Utc>,
) -> Result<SolarPathData> {
    let day = DaySolarReference::new(sunrise, sunset, solar_noon);
    calculate_solar_path_with_config(
        instant,
        coordinate,
        timezone_id,
        &day,
        &SolarPathConfig::default(),
    )
}

/// # Errors
/// Returns `TimezoneResolution` if `timezone_id` is unknown.
pub fn calculate_solar_path_with_config(
    instant: &DateTime<Utc>,
    coordinate: Coordinate,
    timezone_id: &str,
    day: &DaySolarReference,
    config: &SolarPathConfig,
) -> Result<SolarPathData> {
    let zone = time::resolve_timezone(timezone_id)?;
    let positions = DayPositions::compute(coordinate, zone, day, config.noon_reference);
    let current = sun_position_with_zone(instant, coordinate, zone);
    let max_altitude = positions.max_altitude();

    log::trace!(
        "solar path at {instant} in {zone}: altitude {:.3}, peak {:.3}",
        current.altitude,
        max_altitude
    );

    Ok(SolarPathData {
        current_position: current,
        sunrise_position: positions.sunrise,
        solar_noon_position: positions.solar_noon,
        sunset_position: positions.sunset,
        sun_progress: sun_progress(instant, day),
        altitude_progress: altitude_progress(current.altitude, max_altitude),
        max_daily_altitude: max_altitude,
        true_solar_noon: positions.true_solar_noon,
    })
}

/// Samples `point_count + 1` evenly spaced instants from sunrise to sunset and maps each
/// into drawing space with the default [`PathLayout`].
///
/// # Errors
/// Returns `TimezoneResolution` if `timezone_id` is unknown.
pub fn generate_sun_path_samples(
    coordinate: Coordinate,
    timezone_id: &str,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    solar_noon: DateTime<Utc>,
    point_count: usize,
) -> Result<Vec<PathSample>> {
    let day = DaySolarReference::new(sunrise, sunset, solar_noon);
    let config = SolarPathConfig {
        point_count,
        ..SolarPathConfig::default()
    };
    generate_sun_path_samples_with_config(coordinate, timezone_id, &day, &config)
}

/// Samples are computed in parallel; the returned vector is ordered by sample index.
/// A `point_count` of zero yields the single sunrise sample.
///
/// # Errors
/// Returns `TimezoneResolution` if `timezone_id` is unknown.
pub fn generate_sun_path_samples_with_config(
    coordinate: Coordinate,
    timezone_id: &str,
    day: &DaySolarReference,
    config: &SolarPathConfig,
) -> Result<Vec<PathSample>> {
    let zone = time::resolve_timezone(timezone_id)?;
    let positions = DayPositions::compute(coordinate, zone, day, config.noon_reference);
    let max_altitude = positions.max_altitude();
    let point_count = config.point_count;
    let layout = config.layout;

    let samples: Vec<PathSample> = (0..point_count.saturating_add(1))
        .into_par_iter()
        .map(|i| {
            let t = if point_count == 0 {
                0.0
            } else {
                i as f64 / point_count as f64
            };
            let instant = day.instant_at(t);
            let position = sun_position_with_zone(&instant, coordinate, zone);
            let progress = sun_progress(&instant, day);
            let (x, y) = project_sample(progress, position.altitude, max_altitude, &layout);
            (x, y, position)
        })
        .collect();

    log::trace!(
        "sampled {} path points in {zone}, peak altitude {:.3}",
        samples.len(),
        max_altitude
    );
    Ok(samples)
}
