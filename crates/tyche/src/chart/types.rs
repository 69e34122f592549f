//! Chart result structures handed to the presentation and text layers.

use crate::western::{Body, EssentialDignity, RulerKind, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved body (or angle) in the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Apparent daily motion in degrees/day
    pub speed: f64,
    pub is_retrograde: bool,
    pub sign: ZodiacSign,
    /// Whole-sign house 1-12
    pub house: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dignity: Option<EssentialDignity>,
}

/// Ruler of a house's sign and the house that ruler currently occupies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulerRef {
    pub body: Body,
    pub kind: RulerKind,
    /// `None` when the ruling body is missing from the chart
    pub house: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    pub house_number: u8,
    pub sign: ZodiacSign,
    pub theme_key: String,
    pub rulers: Vec<RulerRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotKey {
    Fortune,
    Spirit,
    Eros,
    Necessity,
    Courage,
    Victory,
    Nemesis,
}

impl LotKey {
    pub const ALL: [LotKey; 7] = [
        LotKey::Fortune,
        LotKey::Spirit,
        LotKey::Eros,
        LotKey::Necessity,
        LotKey::Courage,
        LotKey::Victory,
        LotKey::Nemesis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LotKey::Fortune => "fortune",
            LotKey::Spirit => "spirit",
            LotKey::Eros => "eros",
            LotKey::Necessity => "necessity",
            LotKey::Courage => "courage",
            LotKey::Victory => "victory",
            LotKey::Nemesis => "nemesis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HermeticLot {
    pub key: LotKey,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfectionState {
    pub age: u32,
    pub house_number: u8,
    pub sign: ZodiacSign,
    pub time_lord: Body,
    pub theme_key: String,
}

/// Complete natal chart. Built once per birth input and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub name: String,
    pub birth_instant: DateTime<Utc>,
    /// Bodies in resolution order, followed by the ascendant and midheaven
    pub positions: Vec<BodyPosition>,
    pub houses: Vec<HouseRecord>,
    pub profection: ProfectionState,
    pub hermetic_lots: Vec<HermeticLot>,
    pub is_day_chart: bool,
    pub ascendant_sign: ZodiacSign,
    /// Rotation applied by chart wheels so the ascendant sign sits on the left
    pub zodiac_offset: f64,
}

impl ChartResult {
    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn ascendant(&self) -> Option<&BodyPosition> {
        self.position(Body::Ascendant)
    }

    pub fn midheaven(&self) -> Option<&BodyPosition> {
        self.position(Body::Midheaven)
    }

    pub fn lot(&self, key: LotKey) -> Option<&HermeticLot> {
        self.hermetic_lots.iter().find(|l| l.key == key)
    }

    pub fn house(&self, house_number: u8) -> Option<&HouseRecord> {
        self.houses.iter().find(|h| h.house_number == house_number)
    }

    /// Sun by day, Moon by night.
    pub fn sect_light(&self) -> Body {
        if self.is_day_chart {
            Body::Sun
        } else {
            Body::Moon
        }
    }
}
