//! Errors surfaced by chart and transit computations.

use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors that can occur while computing a chart or scanning transits
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid location (lat {latitude}, lng {longitude}): {reason}")]
    InvalidLocation {
        latitude: f64,
        longitude: f64,
        reason: String,
    },
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("Invalid birth input: {0}")]
    Domain(String),
    #[error("Transit scan cancelled")]
    ScanCancelled,
    #[error("Transit scan aborted: {0}")]
    ScanAborted(String),
}

impl ChartError {
    pub(crate) fn invalid_location(latitude: f64, longitude: f64, reason: impl Into<String>) -> Self {
        ChartError::InvalidLocation {
            latitude,
            longitude,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
