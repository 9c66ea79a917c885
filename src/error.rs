use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Failures the sun-path engine reports to its callers.
///
/// Degenerate daylight windows and non-positive peak altitudes are not errors;
/// they resolve to fixed fallback values in [`crate::solar_path`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The IANA identifier did not name a known timezone.
    #[error("unable to resolve timezone identifier {id:?}")]
    TimezoneResolution { id: String },

    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },
}

impl CoreError {
    pub fn timezone_resolution(id: impl Into<String>) -> Self {
        Self::TimezoneResolution { id: id.into() }
    }

    pub fn is_timezone_resolution(&self) -> bool {
        matches!(self, Self::TimezoneResolution { .. })
    }
}

pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::InvalidLatitude { value: latitude });
    }
    Ok(())
}

pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::InvalidLongitude { value: longitude });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(90.5).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-122.4194).is_ok());
        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::timezone_resolution("Not/AZone");
        assert_eq!(
            err.to_string(),
            "unable to resolve timezone identifier \"Not/AZone\""
        );
        assert!(err.is_timezone_resolution());

        let err = CoreError::InvalidLatitude { value: 95.0 };
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );
        assert!(!err.is_timezone_resolution());
    }
}
