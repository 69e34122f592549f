//! Essential dignities for Western astrology.
//!
//! Domicile, exaltation, detriment and fall per body, with the conventional
//! modern assignments for the outer planets and the lunar nodes.

use crate::western::types::{Body, ZodiacSign};
use serde::{Deserialize, Serialize};

use ZodiacSign::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EssentialDignity {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
}

/// Signs a body rules.
pub fn domicile_signs(body: Body) -> &'static [ZodiacSign] {
    match body {
        Body::Sun => &[Leo],
        Body::Moon => &[Cancer],
        Body::Mercury => &[Gemini, Virgo],
        Body::Venus => &[Taurus, Libra],
        Body::Mars => &[Aries, Scorpio],
        Body::Jupiter => &[Sagittarius, Pisces],
        Body::Saturn => &[Capricorn, Aquarius],
        Body::Uranus => &[Aquarius],
        Body::Neptune => &[Pisces],
        Body::Pluto => &[Scorpio],
        Body::Chiron
        | Body::NorthNode
        | Body::SouthNode
        | Body::Ascendant
        | Body::Midheaven => &[],
    }
}

/// Signs opposite the domiciles.
pub fn detriment_signs(body: Body) -> &'static [ZodiacSign] {
    match body {
        Body::Sun => &[Aquarius],
        Body::Moon => &[Capricorn],
        Body::Mercury => &[Sagittarius, Pisces],
        Body::Venus => &[Aries, Scorpio],
        Body::Mars => &[Taurus, Libra],
        Body::Jupiter => &[Gemini, Virgo],
        Body::Saturn => &[Cancer, Leo],
        Body::Uranus => &[Leo],
        Body::Neptune => &[Virgo],
        Body::Pluto => &[Taurus],
        Body::Chiron
        | Body::NorthNode
        | Body::SouthNode
        | Body::Ascendant
        | Body::Midheaven => &[],
    }
}

pub fn exaltation_sign(body: Body) -> Option<ZodiacSign> {
    match body {
        Body::Sun => Some(Aries),
        Body::Moon => Some(Taurus),
        Body::Mercury => Some(Virgo),
        Body::Venus => Some(Pisces),
        Body::Mars => Some(Capricorn),
        Body::Jupiter => Some(Cancer),
        Body::Saturn => Some(Libra),
        Body::Uranus => Some(Scorpio),
        Body::NorthNode => Some(Gemini),
        Body::SouthNode => Some(Sagittarius),
        // Neptune and Pluto exaltations are disputed and left unassigned
        Body::Neptune
        | Body::Pluto
        | Body::Chiron
        | Body::Ascendant
        | Body::Midheaven => None,
    }
}

/// Sign opposite the exaltation.
pub fn fall_sign(body: Body) -> Option<ZodiacSign> {
    match body {
        Body::Sun => Some(Libra),
        Body::Moon => Some(Scorpio),
        Body::Mercury => Some(Pisces),
        Body::Venus => Some(Virgo),
        Body::Mars => Some(Cancer),
        Body::Jupiter => Some(Capricorn),
        Body::Saturn => Some(Aries),
        Body::Uranus => Some(Taurus),
        Body::NorthNode => Some(Sagittarius),
        Body::SouthNode => Some(Gemini),
        Body::Neptune
        | Body::Pluto
        | Body::Chiron
        | Body::Ascendant
        | Body::Midheaven => None,
    }
}

pub fn is_domicile(body: Body, sign: ZodiacSign) -> bool {
    domicile_signs(body).contains(&sign)
}

pub fn is_exalted(body: Body, sign: ZodiacSign) -> bool {
    exaltation_sign(body) == Some(sign)
}

pub fn is_detriment(body: Body, sign: ZodiacSign) -> bool {
    detriment_signs(body).contains(&sign)
}

pub fn is_fall(body: Body, sign: ZodiacSign) -> bool {
    fall_sign(body) == Some(sign)
}

/// Every dignity or debility that applies to a placement.
///
/// Mercury in Virgo is both domicile and exaltation, and Mercury in Pisces
/// both detriment and fall; scoring needs all of them.
pub fn dignities(body: Body, sign: ZodiacSign) -> Vec<EssentialDignity> {
    let mut result = Vec::new();
    if is_domicile(body, sign) {
        result.push(EssentialDignity::Domicile);
    }
    if is_exalted(body, sign) {
        result.push(EssentialDignity::Exaltation);
    }
    if is_detriment(body, sign) {
        result.push(EssentialDignity::Detriment);
    }
    if is_fall(body, sign) {
        result.push(EssentialDignity::Fall);
    }
    result
}

/// The single dignity tag shown for a placement.
///
/// Checked in the order domicile, exaltation, detriment, fall; the first match wins.
pub fn essential_dignity(body: Body, sign: ZodiacSign) -> Option<EssentialDignity> {
    dignities(body, sign).into_iter().next()
}
