//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::western::types::{Body, ZodiacSign};
use serde::{Deserialize, Serialize};

/// How a body rules a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerKind {
    /// The sign has a single ruler in both schemes
    Sole,
    Traditional,
    Modern,
}

/// A ruling body together with the scheme it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRuler {
    pub body: Body,
    pub kind: RulerKind,
}

/// Get sign ruler (traditional rulership)
pub fn traditional_ruler(sign: ZodiacSign) -> Body {
    match sign {
        ZodiacSign::Aries => Body::Mars,
        ZodiacSign::Taurus => Body::Venus,
        ZodiacSign::Gemini => Body::Mercury,
        ZodiacSign::Cancer => Body::Moon,
        ZodiacSign::Leo => Body::Sun,
        ZodiacSign::Virgo => Body::Mercury,
        ZodiacSign::Libra => Body::Venus,
        ZodiacSign::Scorpio => Body::Mars,
        ZodiacSign::Sagittarius => Body::Jupiter,
        ZodiacSign::Capricorn => Body::Saturn,
        ZodiacSign::Aquarius => Body::Saturn,
        ZodiacSign::Pisces => Body::Jupiter,
    }
}

/// Modern rulerships hand Scorpio, Aquarius and Pisces to the outer planets
pub fn modern_ruler(sign: ZodiacSign) -> Body {
    match sign {
        ZodiacSign::Scorpio => Body::Pluto,
        ZodiacSign::Aquarius => Body::Uranus,
        ZodiacSign::Pisces => Body::Neptune,
        other => traditional_ruler(other),
    }
}

/// All rulers of a sign: one `Sole` ruler, or a traditional + modern pair.
pub fn sign_rulers(sign: ZodiacSign) -> Vec<SignRuler> {
    let traditional = traditional_ruler(sign);
    let modern = modern_ruler(sign);
    if traditional == modern {
        vec![SignRuler {
            body: traditional,
            kind: RulerKind::Sole,
        }]
    } else {
        vec![
            SignRuler {
                body: traditional,
                kind: RulerKind::Traditional,
            },
            SignRuler {
                body: modern,
                kind: RulerKind::Modern,
            },
        ]
    }
}

/// The ruler used for time-lord purposes: the sole or traditional one.
pub fn principal_ruler(sign: ZodiacSign) -> Body {
    sign_rulers(sign)
        .iter()
        .find(|r| matches!(r.kind, RulerKind::Sole | RulerKind::Traditional))
        .map(|r| r.body)
        .unwrap_or_else(|| traditional_ruler(sign))
}
