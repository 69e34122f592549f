//! Whole-sign house metadata: themes, angularity and planetary joys.

use crate::western::types::Body;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStrength {
    Angular,
    Succedent,
    Cadent,
}

const HOUSE_THEME_KEYS: [&str; 12] = [
    "self",
    "resources",
    "siblings_communication",
    "home_family",
    "children_pleasure",
    "health_service",
    "partnership",
    "death_shared_resources",
    "travel_philosophy",
    "career_reputation",
    "friends_hopes",
    "seclusion_hidden_enemies",
];

/// Text key for a house's theme, consumed by the interpretation lookup.
///
/// `house` is 1-based; out-of-range values wrap.
pub fn house_theme_key(house: u8) -> &'static str {
    HOUSE_THEME_KEYS[(house as usize + 11) % 12]
}

pub fn house_strength(house: u8) -> HouseStrength {
    match house % 3 {
        1 => HouseStrength::Angular,
        2 => HouseStrength::Succedent,
        _ => HouseStrength::Cadent,
    }
}

/// The house in which a planet "rejoices".
pub fn joy_house(body: Body) -> Option<u8> {
    match body {
        Body::Mercury => Some(1),
        Body::Moon => Some(3),
        Body::Venus => Some(5),
        Body::Mars => Some(6),
        Body::Sun => Some(9),
        Body::Jupiter => Some(11),
        Body::Saturn => Some(12),
        _ => None,
    }
}
