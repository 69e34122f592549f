//! Ascendant and midheaven from sidereal time, latitude and obliquity.

use crate::angles::normalize_degrees;
use crate::error::{ChartError, Result};
use crate::time::{local_sidereal_degrees, mean_obliquity_degrees};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    /// Right ascension of the local meridian, degrees
    pub ramc: f64,
    pub obliquity: f64,
}

/// Reject coordinates that make the ascendant undefined or are off the globe.
pub fn validate_location(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ChartError::invalid_location(latitude, longitude, "coordinates must be finite"));
    }
    if latitude.abs() >= 90.0 {
        return Err(ChartError::invalid_location(
            latitude,
            longitude,
            "the ascendant is undefined at the poles",
        ));
    }
    if longitude.abs() > 180.0 {
        return Err(ChartError::invalid_location(
            latitude,
            longitude,
            "longitude must be within [-180, 180]",
        ));
    }
    Ok(())
}

/// Compute the ascendant and midheaven for a UT Julian day.
///
/// Longitude is east positive. Both angles share the same mean obliquity.
pub fn ascendant_midheaven(jd_ut: f64, latitude: f64, longitude: f64) -> Result<ChartAngles> {
    validate_location(latitude, longitude)?;

    let ramc = local_sidereal_degrees(jd_ut, longitude);
    let obliquity = mean_obliquity_degrees(jd_ut);

    let ramc_rad = ramc.to_radians();
    let eps = obliquity.to_radians();
    let lat = latitude.to_radians();

    let y = ramc_rad.cos();
    let x = -(ramc_rad.sin() * eps.cos() + lat.tan() * eps.sin());
    let ascendant = normalize_degrees(y.atan2(x).to_degrees());

    let mut midheaven = normalize_degrees(ramc_rad.tan().atan2(eps.cos()).to_degrees());
    let gap = (ramc - midheaven).abs();
    if gap > 90.0 && gap < 270.0 {
        midheaven = normalize_degrees(midheaven + 180.0);
    }

    if !ascendant.is_finite() || !midheaven.is_finite() {
        return Err(ChartError::invalid_location(
            latitude,
            longitude,
            "angle computation produced a non-finite value",
        ));
    }

    log::debug!(
        "RAMC {:.4} obliquity {:.5} -> ASC {:.4} MC {:.4}",
        ramc,
        obliquity,
        ascendant,
        midheaven
    );

    Ok(ChartAngles {
        ascendant,
        midheaven,
        ramc,
        obliquity,
    })
}
