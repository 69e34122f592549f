//! Positive/negative planet report.
//!
//! By day Jupiter is the benefic of sect and Mars the malefic contrary to
//! sect; by night Venus and Saturn. Both of each pair are scored so the
//! report can point at the other one when the primary is in poor shape.

use crate::chart::ChartResult;
use crate::error::{ChartError, Result};
use crate::scoring::condition::score_condition;
use crate::scoring::types::{ConditionStatus, ScoredPlanet};
use crate::western::Body;
use serde::{Deserialize, Serialize};

const IMPEDED_BELOW: i32 = 40;
const CONSTRUCTIVE_ABOVE: i32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveNegativeAnalysis {
    pub is_day_chart: bool,
    pub sect_light: Body,
    /// Benefic of sect
    pub most_positive: ScoredPlanet,
    /// Malefic contrary to sect
    pub most_negative: ScoredPlanet,
    pub other_benefic: ScoredPlanet,
    pub other_malefic: ScoredPlanet,
    /// Set when the other benefic is in a better position to help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_positive: Option<Body>,
    /// Set when the other malefic is the more troublesome one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_negative: Option<Body>,
}

pub fn benefic_status(scored: &ScoredPlanet) -> ConditionStatus {
    if scored.is_averted_to_light {
        ConditionStatus::Disconnected
    } else if scored.total_score < IMPEDED_BELOW {
        ConditionStatus::Impeded
    } else {
        ConditionStatus::Potent
    }
}

pub fn malefic_status(scored: &ScoredPlanet) -> ConditionStatus {
    if scored.is_averted_to_light {
        ConditionStatus::Disconnected
    } else if scored.total_score > CONSTRUCTIVE_ABOVE {
        ConditionStatus::Constructive
    } else if scored.total_score < IMPEDED_BELOW {
        ConditionStatus::Difficult
    } else {
        ConditionStatus::Moderate
    }
}

fn score(chart: &ChartResult, body: Body) -> Result<ScoredPlanet> {
    chart
        .position(body)
        .map(|pos| score_condition(pos, chart))
        .ok_or_else(|| ChartError::Domain(format!("{} is missing from the chart", body)))
}

pub fn analyze_positive_negative(chart: &ChartResult) -> Result<PositiveNegativeAnalysis> {
    let (benefic, other_benefic, malefic, other_malefic) = if chart.is_day_chart {
        (Body::Jupiter, Body::Venus, Body::Mars, Body::Saturn)
    } else {
        (Body::Venus, Body::Jupiter, Body::Saturn, Body::Mars)
    };

    let mut most_positive = score(chart, benefic)?;
    let mut other_positive = score(chart, other_benefic)?;
    let mut most_negative = score(chart, malefic)?;
    let mut other_negative = score(chart, other_malefic)?;

    most_positive.status = Some(benefic_status(&most_positive));
    other_positive.status = Some(benefic_status(&other_positive));
    most_negative.status = Some(malefic_status(&most_negative));
    other_negative.status = Some(malefic_status(&other_negative));

    let alternate_positive = matches!(
        most_positive.status,
        Some(ConditionStatus::Impeded | ConditionStatus::Disconnected)
    ) && !other_positive.is_averted_to_light
        && other_positive.total_score > most_positive.total_score;

    let alternate_negative = matches!(
        most_negative.status,
        Some(ConditionStatus::Disconnected | ConditionStatus::Constructive)
    ) && !other_negative.is_averted_to_light
        && other_negative.total_score < most_negative.total_score;

    log::debug!(
        "{} chart: {} {} / {} {}",
        if chart.is_day_chart { "day" } else { "night" },
        benefic,
        most_positive.total_score,
        malefic,
        most_negative.total_score
    );

    Ok(PositiveNegativeAnalysis {
        is_day_chart: chart.is_day_chart,
        sect_light: chart.sect_light(),
        most_positive,
        most_negative,
        other_benefic: other_positive,
        other_malefic: other_negative,
        alternate_positive: alternate_positive.then_some(other_benefic),
        alternate_negative: alternate_negative.then_some(other_malefic),
    })
}
