//! Whole-sign house records with ruler cross-references.

use crate::chart::types::{BodyPosition, HouseRecord, RulerRef};
use crate::western::{house_theme_key, sign_rulers, ZodiacSign};

/// The twelve houses, each holding one whole sign starting from the ascendant sign.
pub fn build_houses(ascendant_sign: ZodiacSign, positions: &[BodyPosition]) -> Vec<HouseRecord> {
    (1..=12u8)
        .map(|house_number| {
            let sign = ascendant_sign.offset(house_number - 1);
            let rulers = sign_rulers(sign)
                .into_iter()
                .map(|ruler| RulerRef {
                    body: ruler.body,
                    kind: ruler.kind,
                    house: positions.iter().find(|p| p.body == ruler.body).map(|p| p.house),
                })
                .collect();
            HouseRecord {
                house_number,
                sign,
                theme_key: house_theme_key(house_number).to_string(),
                rulers,
            }
        })
        .collect()
}
