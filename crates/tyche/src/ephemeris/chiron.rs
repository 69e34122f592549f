//! Secondary ephemeris for Chiron.
//!
//! Chiron is not part of the planetary tables, so it needs its own data file
//! and an initialization step before the first query.

use crate::ephemeris::adapter::{swiss_calc, EphemerisError, SE_CHIRON};
use crate::western::Body;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

/// Asteroid file covering Chiron for 1800-2400
pub const CHIRON_DATA_FILE: &str = "seas_18.se1";

#[async_trait]
pub trait ChironProvider: Send + Sync {
    /// Load the provider's data. Safe to call any number of times.
    async fn initialize(&self, ephemeris_path: &Path) -> Result<(), EphemerisError>;

    /// Geocentric tropical longitude of Chiron, degrees [0, 360).
    fn longitude_at(&self, jd_ut: f64) -> Result<f64, EphemerisError>;
}

/// Chiron through the Swiss Ephemeris asteroid files.
#[derive(Default)]
pub struct SwissChironProvider {
    ready: OnceCell<PathBuf>,
}

impl SwissChironProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.ready.initialized()
    }
}

#[async_trait]
impl ChironProvider for SwissChironProvider {
    async fn initialize(&self, ephemeris_path: &Path) -> Result<(), EphemerisError> {
        self.ready
            .get_or_try_init(|| async {
                let data_file = ephemeris_path.join(CHIRON_DATA_FILE);
                match tokio::fs::metadata(&data_file).await {
                    Ok(meta) if meta.is_file() => {
                        log::debug!("Chiron ephemeris loaded from {}", data_file.display());
                        Ok(ephemeris_path.to_path_buf())
                    }
                    _ => Err(EphemerisError::FileNotFound {
                        path: data_file.display().to_string(),
                        message: "Chiron requires the Swiss Ephemeris asteroid file.".to_string(),
                    }),
                }
            })
            .await
            .map(|_| ())
    }

    fn longitude_at(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        if !self.ready.initialized() {
            return Err(EphemerisError::NotInitialized {
                provider: "Chiron".to_string(),
            });
        }
        swiss_calc(Body::Chiron, SE_CHIRON, jd_ut).map(|p| p.lon)
    }
}
