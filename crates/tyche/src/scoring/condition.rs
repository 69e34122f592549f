//! Condition score for a single body.
//!
//! Starts at 50 and applies, in a fixed order: relation to the sect light,
//! essential dignity, peregrine penalty, house strength, joy, solar phase,
//! retrogradation, maltreatment by malefics, besiegement and bonification by
//! benefics. The order matters only for the factor list; the total is a sum.

use crate::angles::angular_distance;
use crate::aspects::{AspectCalculator, SignRelation};
use crate::chart::{BodyPosition, ChartResult};
use crate::scoring::types::{ConditionFactor, Polarity, ScoredPlanet};
use crate::western::dignities::{is_detriment, is_exalted, is_fall};
use crate::western::{house_strength, joy_house, traditional_ruler, Body, HouseStrength};

pub const BASE_SCORE: i32 = 50;

/// Cazimi: within 17 arc minutes of the Sun
const CAZIMI_DEG: f64 = 17.0 / 60.0;
const COMBUST_DEG: f64 = 8.0;
const UNDER_BEAMS_DEG: f64 = 15.0;

const MALEFICS: [Body; 2] = [Body::Mars, Body::Saturn];
const BENEFICS: [Body; 2] = [Body::Venus, Body::Jupiter];

struct Ledger {
    score: i32,
    factors: Vec<ConditionFactor>,
}

impl Ledger {
    fn add(&mut self, description: impl Into<String>, points: i32) {
        self.score += points;
        self.factors.push(ConditionFactor {
            description: description.into(),
            points,
            polarity: if points >= 0 {
                Polarity::Positive
            } else {
                Polarity::Negative
            },
        });
    }
}

/// Score a body's condition within its chart. Total for any position.
pub fn score_condition(target: &BodyPosition, chart: &ChartResult) -> ScoredPlanet {
    let aspects = AspectCalculator::new();
    let mut ledger = Ledger {
        score: BASE_SCORE,
        factors: Vec::new(),
    };
    let body = target.body;
    let sign = target.sign;

    // Sect light. The light itself is conjunct its own position.
    let mut averted = false;
    let light = chart.sect_light();
    if let Some(light_pos) = chart.position(light) {
        match aspects.relation(target, light_pos) {
            SignRelation::Conjunction | SignRelation::Trine | SignRelation::Sextile => {
                ledger.add(format!("Sees the sect light ({})", light), 10)
            }
            SignRelation::InferiorSquare | SignRelation::SuperiorSquare | SignRelation::Opposition => {
                ledger.add(format!("Hard aspect to the sect light ({})", light), 5)
            }
            SignRelation::Aversion => {
                averted = true;
                ledger.add(format!("Averted from the sect light ({})", light), -10);
            }
        }
    }

    // Essential dignity
    let ruler = traditional_ruler(sign);
    let domicile = ruler == body;
    let mut reception = false;
    if domicile {
        ledger.add("Domicile", 15);
    } else if let Some(ruler_pos) = chart.position(ruler) {
        if traditional_ruler(ruler_pos.sign) == body {
            reception = true;
            ledger.add(format!("Mutual reception with {}", ruler), 5);
        }
    }

    let exalted = is_exalted(body, sign);
    if exalted {
        ledger.add("Exaltation", 10);
    }
    if is_fall(body, sign) {
        ledger.add("Fall", -15);
    }
    if is_detriment(body, sign) {
        ledger.add("Detriment", -10);
    }

    if !(domicile || exalted || reception) {
        ledger.add("Peregrine", -5);
    }

    // Accidental dignity
    match house_strength(target.house) {
        HouseStrength::Angular => ledger.add("Angular house", 10),
        HouseStrength::Cadent if target.house == 9 => ledger.add("Ninth house (joy of the Sun)", 5),
        HouseStrength::Cadent => ledger.add("Cadent house", -5),
        HouseStrength::Succedent => {}
    }

    if joy_house(body) == Some(target.house) {
        ledger.add("Planetary joy", 10);
    }

    // Solar phase
    if body != Body::Sun {
        if let Some(sun) = chart.position(Body::Sun) {
            let distance = angular_distance(target.longitude, sun.longitude);
            if distance < CAZIMI_DEG {
                ledger.add("Cazimi", 15);
            } else if distance < COMBUST_DEG {
                ledger.add("Combust", -15);
            } else if distance < UNDER_BEAMS_DEG {
                ledger.add("Under the beams", -5);
            }
        }
    }

    if body.is_retrograde_sensitive() && target.is_retrograde {
        ledger.add("Retrograde", -10);
    }

    // Maltreatment
    for malefic in MALEFICS {
        if malefic == body {
            continue;
        }
        let Some(other) = chart.position(malefic) else {
            continue;
        };
        if aspects.is_tight(target, other, SignRelation::SuperiorSquare) {
            ledger.add(format!("Overcome by {} (superior square)", malefic), -15);
        } else if aspects.is_tight(target, other, SignRelation::Opposition) {
            ledger.add(format!("Opposed by {}", malefic), -10);
        } else if aspects.is_tight(target, other, SignRelation::Conjunction) {
            ledger.add(format!("Conjunct {}", malefic), -10);
        }
    }

    // Besiegement by sign
    if !MALEFICS.contains(&body) {
        if let (Some(mars), Some(saturn)) = (chart.position(Body::Mars), chart.position(Body::Saturn)) {
            let before = sign.offset(11);
            let after = sign.offset(1);
            if (mars.sign == before && saturn.sign == after) || (saturn.sign == before && mars.sign == after) {
                ledger.add("Besieged by Mars and Saturn", -20);
            }
        }
    }

    // Bonification
    for benefic in BENEFICS {
        if benefic == body {
            continue;
        }
        let Some(other) = chart.position(benefic) else {
            continue;
        };
        if aspects.is_tight(target, other, SignRelation::Conjunction) {
            ledger.add(format!("Conjunct {}", benefic), 10);
        } else if aspects.is_tight(target, other, SignRelation::Trine) {
            ledger.add(format!("Trine from {}", benefic), 5);
        } else if aspects.is_tight(target, other, SignRelation::SuperiorSquare) {
            ledger.add(format!("Overcome by {} (superior square)", benefic), 8);
        }
    }

    ScoredPlanet {
        body,
        factors: ledger.factors,
        base_score: BASE_SCORE,
        total_score: ledger.score,
        status: None,
        is_averted_to_light: averted,
    }
}
