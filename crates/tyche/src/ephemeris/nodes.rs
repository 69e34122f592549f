//! Osculating lunar nodes.
//!
//! The node is taken from the Moon's instantaneous orbital plane: two position
//! samples a couple of minutes apart span the plane, their cross product is
//! its normal, and the line where that plane meets the ecliptic points at the
//! ascending node. No mean-node series is involved.

use crate::angles::normalize_degrees;
use crate::ephemeris::adapter::{Ephemeris, EphemerisError};
use crate::western::Body;

/// Default spacing of the two Moon samples, in minutes
pub const NODE_PROBE_MINUTES: f64 = 2.0;

/// Nominal node speed in degrees per day (always retrograde)
pub const NOMINAL_NODE_SPEED: f64 = -0.053;

const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarNodes {
    pub north: f64,
    pub south: f64,
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Ascending and descending node longitudes at `jd_ut`.
pub fn lunar_nodes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    probe_minutes: f64,
) -> Result<LunarNodes, EphemerisError> {
    let p0 = ephemeris.ecliptic_position(Body::Moon, jd_ut)?.unit_vector();
    let p1 = ephemeris
        .ecliptic_position(Body::Moon, jd_ut + probe_minutes / MINUTES_PER_DAY)?
        .unit_vector();

    let normal = cross(p0, p1);
    // (0, 0, 1) x normal
    let node_x = -normal[1];
    let node_y = normal[0];

    let north = normalize_degrees(node_y.atan2(node_x).to_degrees());
    Ok(LunarNodes {
        north,
        south: normalize_degrees(north + 180.0),
    })
}

/// Longitude of the north node with the default probe spacing.
pub fn north_node_longitude<E: Ephemeris + ?Sized>(ephemeris: &E, jd_ut: f64) -> Result<f64, EphemerisError> {
    lunar_nodes(ephemeris, jd_ut, NODE_PROBE_MINUTES).map(|n| n.north)
}
