use serde::{Deserialize, Serialize};

/// Whole-sign relation between two signs, keyed by how many signs
/// the other body sits ahead of the reference body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignRelation {
    Conjunction,
    Sextile,
    /// Other body 3 signs ahead (4th sign)
    InferiorSquare,
    Trine,
    Opposition,
    /// Other body 9 signs ahead (10th sign): it overcomes the reference body
    SuperiorSquare,
    /// 2nd, 6th, 8th or 12th sign: no aspect at all
    Aversion,
}

impl SignRelation {
    /// Relation for a forward sign distance 0..=11.
    pub fn from_distance(distance: u8) -> Self {
        match distance % 12 {
            0 => SignRelation::Conjunction,
            2 | 10 => SignRelation::Sextile,
            3 => SignRelation::InferiorSquare,
            9 => SignRelation::SuperiorSquare,
            4 | 8 => SignRelation::Trine,
            6 => SignRelation::Opposition,
            _ => SignRelation::Aversion,
        }
    }

    /// Nominal angle of the aspect; `None` for aversion.
    pub fn exact_angle(self) -> Option<f64> {
        match self {
            SignRelation::Conjunction => Some(0.0),
            SignRelation::Sextile => Some(60.0),
            SignRelation::InferiorSquare | SignRelation::SuperiorSquare => Some(90.0),
            SignRelation::Trine => Some(120.0),
            SignRelation::Opposition => Some(180.0),
            SignRelation::Aversion => None,
        }
    }
}
