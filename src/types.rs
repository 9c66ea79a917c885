use chrono::{DateTime, Duration, Utc};

use crate::error::{check_latitude, check_longitude, Result};

pub const DEFAULT_POINT_COUNT: usize = 50;

/// Observer location in degrees, longitude east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validates latitude in [-90, 90] and longitude in [-180, 180].
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Apparent horizontal position of the sun.
///
/// `altitude` is in [-90, 90] degrees after refraction; `azimuth` is in [0, 360)
/// degrees, clockwise from true north.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

impl SunPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Sunrise, sunset and solar noon for one civil day, as supplied by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySolarReference {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
}

impl DaySolarReference {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, solar_noon: DateTime<Utc>) -> Self {
        Self {
            sunrise,
            sunset,
            solar_noon,
        }
    }

    /// Uses the sunrise/sunset midpoint as the noon estimate.
    pub fn from_sunrise_sunset(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        let solar_noon = sunrise + (sunset - sunrise) / 2;
        Self::new(sunrise, sunset, solar_noon)
    }

    /// False for polar days/nights and other inputs where sunset does not follow sunrise.
    pub fn is_regular(&self) -> bool {
        self.sunrise < self.sunset
    }

    pub fn daylight(&self) -> Duration {
        self.sunset - self.sunrise
    }

    pub fn daylight_seconds(&self) -> f64 {
        duration_seconds(self.daylight())
    }

    /// The instant `fraction` of the way from sunrise to sunset.
    pub fn instant_at(&self, fraction: f64) -> DateTime<Utc> {
        let offset_nanos = (self.daylight_seconds() * fraction * 1e9).round() as i64;
        self.sunrise + Duration::nanoseconds(offset_nanos)
    }
}

pub(crate) fn duration_seconds(d: Duration) -> f64 {
    match d.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => d.num_milliseconds() as f64 / 1e3,
    }
}

/// Which instant defines the day's peak altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoonReference {
    /// The solar noon handed in by the caller.
    #[default]
    Supplied,
    /// The instant the hour angle crosses zero, searched from the supplied estimate.
    TrueSolarNoon,
}

/// Drawing-space layout for the sun-path polyline, in normalized [0, 1] units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLayout {
    pub inset_left: f64,
    pub inset_right: f64,
    pub baseline: f64,
    pub available_height: f64,
    pub top_margin: f64,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            inset_left: 0.05,
            inset_right: 0.95,
            baseline: 0.85,
            available_height: 0.70,
            top_margin: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPathConfig {
    pub noon_reference: NoonReference,
    pub layout: PathLayout,
    pub point_count: usize,
}

impl Default for SolarPathConfig {
    fn default() -> Self {
        Self {
            noon_reference: NoonReference::default(),
            layout: PathLayout::default(),
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPathData {
    pub current_position: SunPosition,
    pub sunrise_position: SunPosition,
    pub solar_noon_position: SunPosition,
    pub sunset_position: SunPosition,
    /// Elapsed fraction of the daylight window, in [0, 1].
    pub sun_progress: f64,
    /// Current altitude over the day's peak altitude, in [0, 1].
    pub altitude_progress: f64,
    pub max_daily_altitude: f64,
    pub true_solar_noon: DateTime<Utc>,
}

/// `(x, y, position)` for one point of the drawn sun path.
pub type PathSample = (f64, f64, SunPosition);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_midpoint_noon() {
        let sunrise = Utc.with_ymd_and_hms(2024, 6, 21, 12, 48, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 6, 22, 3, 34, 0).unwrap();
        let day = DaySolarReference::from_sunrise_sunset(sunrise, sunset);
        assert_eq!(
            day.solar_noon,
            Utc.with_ymd_and_hms(2024, 6, 21, 20, 11, 0).unwrap()
        );
        assert!(day.is_regular());
        assert_eq!(day.daylight_seconds(), 14.0 * 3600.0 + 46.0 * 60.0);
    }

    #[test]
    fn test_instant_at_endpoints() {
        let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
        let day = DaySolarReference::from_sunrise_sunset(sunrise, sunset);
        assert_eq!(day.instant_at(0.0), sunrise);
        assert_eq!(day.instant_at(1.0), sunset);
        assert_eq!(day.instant_at(0.25), Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_degenerate_day_not_regular() {
        let t = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let day = DaySolarReference::new(t, t, t);
        assert!(!day.is_regular());
        assert_eq!(day.daylight_seconds(), 0.0);
    }

    #[test]
    fn test_coordinate_validation() {
        let c = Coordinate::new(37.7749, -122.4194).unwrap();
        assert_eq!(c.latitude(), 37.7749);
        assert_eq!(c.longitude(), -122.4194);
        assert!(Coordinate::new(-91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
    }

    #[test]
    fn test_default_config() {
        let c = SolarPathConfig::default();
        assert_eq!(c.point_count, 50);
        assert_eq!(c.noon_reference, NoonReference::Supplied);
        assert!(c.layout.inset_left < c.layout.inset_right);
        assert!(c.layout.top_margin < c.layout.baseline);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json() {
        let config = SolarPathConfig {
            noon_reference: NoonReference::TrueSolarNoon,
            point_count: 24,
            ..SolarPathConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SolarPathConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
