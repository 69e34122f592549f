use crate::western::Body;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// One scored consideration, e.g. "Domicile +15"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionFactor {
    pub description: String,
    pub points: i32,
    pub polarity: Polarity,
}

/// Sect-relative classification of a scored benefic or malefic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    /// Benefic in good condition
    Potent,
    /// Benefic scoring below 40
    Impeded,
    /// Averted from the sect light
    Disconnected,
    /// Malefic scoring below 40
    Difficult,
    /// Malefic scoring above 60
    Constructive,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlanet {
    pub body: Body,
    pub factors: Vec<ConditionFactor>,
    pub base_score: i32,
    pub total_score: i32,
    /// Filled in by the positive/negative report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConditionStatus>,
    /// In a sign that cannot see the sect light
    pub is_averted_to_light: bool,
}

impl ScoredPlanet {
    pub fn has_factor(&self, description: &str) -> bool {
        self.factors.iter().any(|f| f.description == description)
    }
}
