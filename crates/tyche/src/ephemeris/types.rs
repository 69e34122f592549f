use serde::{Deserialize, Serialize};

/// Geocentric ecliptic coordinates, true equinox of date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl EclipticPosition {
    /// Unit vector on the celestial sphere (x towards 0° Aries, z towards the ecliptic pole).
    pub fn unit_vector(&self) -> [f64; 3] {
        let lambda = self.lon.to_radians();
        let beta = self.lat.to_radians();
        [
            beta.cos() * lambda.cos(),
            beta.cos() * lambda.sin(),
            beta.sin(),
        ]
    }
}
