use crate::angles::normalize_degrees;
use crate::ephemeris::types::EclipticPosition;
use crate::western::Body;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swisseph::swe::{calc_ut, set_ephe_path};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("{provider} ephemeris has not been initialized")]
    NotInitialized { provider: String },
    #[error("{body} is not served by this ephemeris")]
    UnsupportedBody { body: Body },
    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed { body: Body, jd: f64, message: String },
}

/// Source of geocentric, true-of-date ecliptic positions.
///
/// Sign boundaries are expressed in the tropical frame of the date, so
/// implementations must not return J2000-fixed coordinates.
pub trait Ephemeris: Send + Sync {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError>;

    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.ecliptic_position(body, jd_ut).map(|p| p.lon)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        (**self).ecliptic_position(body, jd_ut)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        (**self).ecliptic_position(body, jd_ut)
    }
}

/// FLG_SWIEPH: use Swiss Ephemeris files, Moshier fallback for planets
pub(crate) const FLG_SWIEPH: i32 = 2;

/// Swiss Ephemeris body code for Chiron
pub(crate) const SE_CHIRON: i32 = 15;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris planet IDs
fn planet_code(body: Body) -> Option<i32> {
    match body {
        Body::Sun => Some(0),
        Body::Moon => Some(1),
        Body::Mercury => Some(2),
        Body::Venus => Some(3),
        Body::Mars => Some(4),
        Body::Jupiter => Some(5),
        Body::Saturn => Some(6),
        Body::Uranus => Some(7),
        Body::Neptune => Some(8),
        Body::Pluto => Some(9),
        // Nodes are derived from lunar geometry, Chiron comes from the secondary provider
        Body::Chiron
        | Body::NorthNode
        | Body::SouthNode
        | Body::Ascendant
        | Body::Midheaven => None,
    }
}

/// Resolve the ephemeris directory: explicit path, `SWISS_EPHEMERIS_PATH`, then the system default
pub fn resolve_ephemeris_path(ephemeris_path: Option<&Path>) -> PathBuf {
    ephemeris_path.map(Path::to_path_buf).unwrap_or_else(|| {
        env::var("SWISS_EPHEMERIS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    })
}

/// Run `swe_calc_ut` for a raw body code, returning `(lon, lat)`.
pub(crate) fn swiss_calc(body: Body, code: i32, jd: f64) -> Result<EclipticPosition, EphemerisError> {
    let result = calc_ut(jd, code as u32, FLG_SWIEPH as u32).map_err(|e| {
        EphemerisError::CalculationFailed {
            body,
            jd,
            message: format!("Swiss Ephemeris error: {}", e),
        }
    })?;

    let result_array = result.out;
    let longitude = result_array[0];
    let latitude = result_array[1];
    if !longitude.is_finite() || !latitude.is_finite() {
        return Err(EphemerisError::CalculationFailed {
            body,
            jd,
            message: "non-finite coordinates".to_string(),
        });
    }

    Ok(EclipticPosition {
        lon: normalize_degrees(longitude),
        lat: latitude,
    })
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = resolve_ephemeris_path(ephemeris_path.as_deref());

        // Validate path exists
        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // Process-wide in the C library: the latest adapter wins
        set_ephe_path(&path.to_string_lossy());
        log::debug!("Swiss Ephemeris path: {}", path.display());

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Calculate position for a single planet
    pub fn calc_planet_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError> {
        let code = planet_code(body).ok_or(EphemerisError::UnsupportedBody { body })?;
        swiss_calc(body, code, jd)
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        self.calc_planet_position(body, jd_ut)
    }
}
