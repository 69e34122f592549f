//! The seven hermetic lots.
//!
//! Each lot is `Asc + A - B` by day and `Asc + B - A` by night. Fortune and
//! Spirit come from the lights; the other five are taken against the
//! already computed Fortune or Spirit, so those two must be resolved first.

use crate::angles::{normalize_degrees, sign_index, whole_sign_house};
use crate::chart::types::{HermeticLot, LotKey};
use crate::western::ZodiacSign;

/// Longitudes the lot formulas read from the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotInputs {
    pub ascendant: f64,
    pub sun: f64,
    pub moon: f64,
    pub mercury: f64,
    pub venus: f64,
    pub mars: f64,
    pub jupiter: f64,
    pub saturn: f64,
}

/// `asc + a - b` by day, `asc + b - a` by night.
pub fn sect_formula(is_day: bool, ascendant: f64, a: f64, b: f64) -> f64 {
    if is_day {
        normalize_degrees(ascendant + a - b)
    } else {
        normalize_degrees(ascendant + b - a)
    }
}

pub fn lot_of_fortune(is_day: bool, ascendant: f64, sun: f64, moon: f64) -> f64 {
    sect_formula(is_day, ascendant, moon, sun)
}

pub fn lot_of_spirit(is_day: bool, ascendant: f64, sun: f64, moon: f64) -> f64 {
    sect_formula(is_day, ascendant, sun, moon)
}

/// Longitudes of all seven lots in [`LotKey::ALL`] order.
pub fn lot_longitudes(is_day: bool, p: &LotInputs) -> [(LotKey, f64); 7] {
    let fortune = lot_of_fortune(is_day, p.ascendant, p.sun, p.moon);
    let spirit = lot_of_spirit(is_day, p.ascendant, p.sun, p.moon);
    [
        (LotKey::Fortune, fortune),
        (LotKey::Spirit, spirit),
        (LotKey::Eros, sect_formula(is_day, p.ascendant, p.venus, spirit)),
        (LotKey::Necessity, sect_formula(is_day, p.ascendant, fortune, p.mercury)),
        (LotKey::Courage, sect_formula(is_day, p.ascendant, fortune, p.mars)),
        (LotKey::Victory, sect_formula(is_day, p.ascendant, p.jupiter, spirit)),
        (LotKey::Nemesis, sect_formula(is_day, p.ascendant, fortune, p.saturn)),
    ]
}

pub fn compute_lots(is_day: bool, inputs: &LotInputs, ascendant_sign: u8) -> Vec<HermeticLot> {
    lot_longitudes(is_day, inputs)
        .into_iter()
        .map(|(key, longitude)| {
            let sign = sign_index(longitude);
            HermeticLot {
                key,
                longitude,
                sign: ZodiacSign::from_index(sign),
                house: whole_sign_house(sign, ascendant_sign),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(ascendant: f64, sun: f64, moon: f64) -> LotInputs {
        LotInputs {
            ascendant,
            sun,
            moon,
            mercury: 80.0,
            venus: 120.0,
            mars: 10.0,
            jupiter: 300.0,
            saturn: 250.0,
        }
    }

    #[test]
    fn test_day_fortune_and_spirit() {
        assert_eq!(lot_of_fortune(true, 100.0, 90.0, 200.0), 210.0);
        assert_eq!(lot_of_spirit(true, 100.0, 90.0, 200.0), 350.0);
    }

    #[test]
    fn test_night_fortune_and_spirit() {
        assert_eq!(lot_of_fortune(false, 100.0, 200.0, 300.0), 0.0);
        assert_eq!(lot_of_spirit(false, 100.0, 200.0, 300.0), 200.0);
    }

    #[test]
    fn test_sect_flip_swaps_fortune_and_spirit() {
        let (asc, sun, moon) = (17.3, 241.9, 5.25);
        assert_eq!(lot_of_fortune(true, asc, sun, moon), lot_of_spirit(false, asc, sun, moon));
        assert_eq!(lot_of_spirit(true, asc, sun, moon), lot_of_fortune(false, asc, sun, moon));
    }

    #[test]
    fn test_derived_lots_chain_on_fortune_and_spirit() {
        let p = inputs(100.0, 90.0, 200.0);
        let lots = lot_longitudes(true, &p);
        // Fortune 210, Spirit 350
        assert_eq!(lots[2], (LotKey::Eros, normalize_degrees(100.0 + 120.0 - 350.0)));
        assert_eq!(lots[3], (LotKey::Necessity, normalize_degrees(100.0 + 210.0 - 80.0)));
        assert_eq!(lots[4], (LotKey::Courage, normalize_degrees(100.0 + 210.0 - 10.0)));
        assert_eq!(lots[5], (LotKey::Victory, normalize_degrees(100.0 + 300.0 - 350.0)));
        assert_eq!(lots[6], (LotKey::Nemesis, normalize_degrees(100.0 + 210.0 - 250.0)));
    }

    #[test]
    fn test_lot_houses_follow_ascendant_sign() {
        let p = inputs(100.0, 90.0, 200.0);
        let lots = compute_lots(true, &p, 3);
        assert_eq!(lots.len(), 7);
        let fortune = &lots[0];
        assert_eq!(fortune.sign, ZodiacSign::Scorpio);
        assert_eq!(fortune.house, 5);
        for lot in &lots {
            assert!((0.0..360.0).contains(&lot.longitude));
            assert_eq!(lot.house, whole_sign_house(lot.sign.index(), 3));
        }
    }
}
