//! Empirical atmospheric refraction, as used by the NOAA solar calculator.
//!
//! The correction is added to the geometric altitude; all inputs and outputs are degrees.

use crate::angles::deg_to_rad;

const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefractionRegime {
    /// Above 85°: negligible.
    None,
    /// (5°, 85°]: series in 1/tan(h).
    Standard,
    /// (-0.575°, 5°]: quartic in h.
    NearHorizon,
    /// At or below -0.575°. Coarse, kept unchanged so rendered paths stay stable.
    BelowHorizon,
}

pub fn refraction_regime(altitude: f64) -> RefractionRegime {
    if altitude > 85.0 {
        RefractionRegime::None
    } else if altitude > 5.0 {
        RefractionRegime::Standard
    } else if altitude > -0.575 {
        RefractionRegime::NearHorizon
    } else {
        RefractionRegime::BelowHorizon
    }
}

/// Refraction in degrees for a geometric altitude in degrees.
pub fn refraction_correction(altitude: f64) -> f64 {
    let arcsec = match refraction_regime(altitude) {
        RefractionRegime::None => 0.0,
        RefractionRegime::Standard => {
            let te = deg_to_rad(altitude).tan();
            58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
        }
        RefractionRegime::NearHorizon => {
            let h = altitude;
            1735.0 + h * (-518.2 + h * (103.4 + h * (-12.79 + h * 0.711)))
        }
        RefractionRegime::BelowHorizon => -20.774 / deg_to_rad(altitude).tan(),
    };
    arcsec / ARCSEC_PER_DEGREE
}

pub fn apparent_altitude(geometric_altitude: f64) -> f64 {
    (geometric_altitude + refraction_correction(geometric_altitude)).clamp(-90.0, 90.0)
}
