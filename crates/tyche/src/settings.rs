//! Engine settings. Every field has a default so an empty TOML document is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Swiss Ephemeris data directory
    pub ephemeris_path: Option<PathBuf>,
    /// Forward step for the speed finite difference, in days
    pub retrograde_probe_days: f64,
    /// Spacing of the two Moon samples for the osculating node, in minutes
    pub node_probe_minutes: f64,
    /// Nominal node speed in degrees/day
    pub node_speed: f64,
    pub transits: TransitScanSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            retrograde_probe_days: 0.01,
            node_probe_minutes: crate::ephemeris::NODE_PROBE_MINUTES,
            node_speed: crate::ephemeris::NOMINAL_NODE_SPEED,
            transits: TransitScanSettings::default(),
        }
    }
}

/// Long-horizon transit scan parameters.
///
/// Event dates depend on the exact step and guard values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitScanSettings {
    pub step_days: f64,
    /// Scan window start, years after birth
    pub start_years: f64,
    /// Scan window end, years after birth
    pub end_years: f64,
    /// A sign flip only counts when the new difference is below this many degrees
    pub crossing_guard_deg: f64,
    /// Raw hits closer than this are one multi-pass contact
    pub cluster_gap_days: f64,
}

impl Default for TransitScanSettings {
    fn default() -> Self {
        Self {
            step_days: 10.0,
            start_years: 10.0,
            end_years: 88.0,
            crossing_guard_deg: 20.0,
            cluster_gap_days: 2.0 * crate::time::DAYS_PER_YEAR,
        }
    }
}

impl EngineSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
