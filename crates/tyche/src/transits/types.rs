use crate::western::{Body, ZodiacSign};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitKind {
    /// The transiting body returns to its natal longitude
    Return,
    /// The transiting body crosses the natal ascendant
    AscendantConjunction,
}

/// Position of a hit inside a retrograde multi-pass contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPhase {
    First,
    Retrograde,
    Final,
}

impl fmt::Display for ContactPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactPhase::First => "first contact",
            ContactPhase::Retrograde => "retrograde contact",
            ContactPhase::Final => "final contact",
        })
    }
}

/// A tracked (body, event type) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitTarget {
    pub body: Body,
    pub kind: TransitKind,
}

/// A detected return or ascendant crossing.
///
/// Dates carry the scan step resolution; only the year and month are meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitEvent {
    pub jd: f64,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub body: Body,
    pub kind: TransitKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<ContactPhase>,
    /// Sign of the natal point being contacted
    pub natal_sign: ZodiacSign,
    /// Whole-sign house of the natal point being contacted
    pub natal_house: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransitEvent {
    pub fn target(&self) -> TransitTarget {
        TransitTarget {
            body: self.body,
            kind: self.kind,
        }
    }

    /// Short label such as "Saturn return (final contact)".
    pub fn label(&self) -> String {
        let base = match self.kind {
            TransitKind::Return => format!("{} return", self.body),
            TransitKind::AscendantConjunction => format!("{} crosses the ascendant", self.body),
        };
        match self.phase {
            Some(phase) => format!("{} ({})", base, phase),
            None => base,
        }
    }
}
