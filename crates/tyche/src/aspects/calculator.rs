use crate::angles::angular_distance;
use crate::aspects::types::SignRelation;
use crate::chart::BodyPosition;

/// Degree orb for an aspect to count as bonifying or maltreating, measured
/// from the exact angle. Scoring by raw separation instead would differ for
/// tight oppositions, trines and superior squares.
pub const DEGREE_ORB: f64 = 3.0;

/// Forward sign distance from `from_sign` to `to_sign`, 0..=11.
pub fn sign_distance(from_sign: u8, to_sign: u8) -> u8 {
    ((to_sign as i16 - from_sign as i16 + 12) % 12) as u8
}

/// Whole-sign aspect calculator
pub struct AspectCalculator {
    degree_orb: f64,
}

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self {
            degree_orb: DEGREE_ORB,
        }
    }

    /// Relation of `other` as seen from `target`.
    pub fn relation(&self, target: &BodyPosition, other: &BodyPosition) -> SignRelation {
        SignRelation::from_distance(sign_distance(target.sign.index(), other.sign.index()))
    }

    /// Deviation of the pair's separation from the relation's exact angle.
    pub fn orb(&self, target: &BodyPosition, other: &BodyPosition, relation: SignRelation) -> Option<f64> {
        relation
            .exact_angle()
            .map(|exact| (angular_distance(target.longitude, other.longitude) - exact).abs())
    }

    /// Whole-sign match with the separation within the degree orb of exact.
    pub fn is_tight(&self, target: &BodyPosition, other: &BodyPosition, relation: SignRelation) -> bool {
        self.relation(target, other) == relation
            && self
                .orb(target, other, relation)
                .map_or(false, |orb| orb <= self.degree_orb)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
