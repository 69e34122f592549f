//! Body position resolution: longitude, sign, whole-sign house, speed and dignity.

use crate::angles::{sign_index, signed_delta, whole_sign_house};
use crate::chart::types::BodyPosition;
use crate::ephemeris::{lunar_nodes, ChironProvider, Ephemeris, EphemerisError};
use crate::western::{essential_dignity, Body, ZodiacSign};

/// Build a position record from a longitude already in [0, 360).
pub fn place(body: Body, longitude: f64, speed: f64, ascendant_sign: u8) -> BodyPosition {
    let sign = sign_index(longitude);
    let zodiac_sign = ZodiacSign::from_index(sign);
    let dignity = if body.is_angle() {
        None
    } else {
        essential_dignity(body, zodiac_sign)
    };
    BodyPosition {
        body,
        longitude,
        speed,
        is_retrograde: speed < 0.0,
        sign: zodiac_sign,
        house: whole_sign_house(sign, ascendant_sign),
        dignity,
    }
}

/// Speed in degrees/day from two samples `probe_days` apart.
///
/// The difference is taken on the short arc so a 359 -> 0 step reads as +1.
pub fn finite_difference_speed(longitude: f64, longitude_later: f64, probe_days: f64) -> f64 {
    signed_delta(longitude_later, longitude) / probe_days
}

/// Resolves every body of a chart at one instant.
pub struct PositionResolver<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    jd_ut: f64,
    ascendant_sign: u8,
    probe_days: f64,
}

impl<'a, E: Ephemeris + ?Sized> PositionResolver<'a, E> {
    pub fn new(ephemeris: &'a E, jd_ut: f64, ascendant_sign: u8, probe_days: f64) -> Self {
        Self {
            ephemeris,
            jd_ut,
            ascendant_sign,
            probe_days,
        }
    }

    /// A body served directly by the primary ephemeris.
    pub fn resolve(&self, body: Body) -> Result<BodyPosition, EphemerisError> {
        let now = self.ephemeris.longitude(body, self.jd_ut)?;
        let later = self.ephemeris.longitude(body, self.jd_ut + self.probe_days)?;
        let speed = finite_difference_speed(now, later, self.probe_days);
        Ok(place(body, now, speed, self.ascendant_sign))
    }

    /// Sun through Pluto, in that order.
    pub fn resolve_planets(&self) -> Result<Vec<BodyPosition>, EphemerisError> {
        Body::EPHEMERIS.iter().map(|body| self.resolve(*body)).collect()
    }

    /// North and south node. Both carry the nominal (retrograde) node speed.
    pub fn resolve_nodes(
        &self,
        probe_minutes: f64,
        node_speed: f64,
    ) -> Result<[BodyPosition; 2], EphemerisError> {
        let nodes = lunar_nodes(self.ephemeris, self.jd_ut, probe_minutes)?;
        Ok([
            place(Body::NorthNode, nodes.north, node_speed, self.ascendant_sign),
            place(Body::SouthNode, nodes.south, node_speed, self.ascendant_sign),
        ])
    }

    /// Chiron from an already initialized secondary provider.
    pub fn resolve_chiron(&self, provider: &dyn ChironProvider) -> Result<BodyPosition, EphemerisError> {
        let now = provider.longitude_at(self.jd_ut)?;
        let later = provider.longitude_at(self.jd_ut + self.probe_days)?;
        let speed = finite_difference_speed(now, later, self.probe_days);
        Ok(place(Body::Chiron, now, speed, self.ascendant_sign))
    }

    /// Ascendant or midheaven as a stationary pseudo-body.
    pub fn resolve_angle(&self, body: Body, longitude: f64) -> BodyPosition {
        place(body, longitude, 0.0, self.ascendant_sign)
    }
}
