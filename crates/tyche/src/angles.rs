//! Degree arithmetic shared by every chart component.

/// Normalize an angle to [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Signed shortest difference `to - from`, normalized to (-180, 180].
pub fn signed_delta(to: f64, from: f64) -> f64 {
    let d = normalize_degrees(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Unsigned separation of two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Sign index 0..=11 (Aries = 0) for an ecliptic longitude.
pub fn sign_index(longitude: f64) -> u8 {
    ((normalize_degrees(longitude) / 30.0).floor() as u8).min(11)
}

/// Whole-sign house (1..=12) of a sign counted from the ascendant sign.
pub fn whole_sign_house(sign: u8, ascendant_sign: u8) -> u8 {
    ((sign as i16 - ascendant_sign as i16 + 12) % 12) as u8 + 1
}
