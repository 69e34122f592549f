use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tyche::ephemeris::CHIRON_DATA_FILE;
use tyche::{EngineSettings, TransitScanSettings};

/// Planetary and lunar data files the primary ephemeris cannot run without.
const REQUIRED_EPHEMERIS_FILES: [&str; 2] = ["sepl_18.se1", "semo_18.se1"];

const CONFIG_ENV: &str = "TYCHE_CONFIG";

/// Try `TYCHE_CONFIG`, then the common relative paths for `configs/tyche.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read {CONFIG_ENV}={path}: {e}"));
    }
    let paths = ["configs/tyche.toml", "../../configs/tyche.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("loaded configuration from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load tyche.toml from {:?}", paths);
}

pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    EngineSettings::from_toml_str(text).map_err(|e| anyhow::anyhow!("Failed to parse tyche.toml: {e}"))
}

pub fn validate_transit_window(transits: &TransitScanSettings) -> anyhow::Result<()> {
    if !(transits.step_days > 0.0) {
        anyhow::bail!("transits.step_days must be positive, got {}", transits.step_days);
    }
    if !(transits.end_years > transits.start_years) {
        anyhow::bail!(
            "transits.end_years ({}) must be after transits.start_years ({})",
            transits.end_years,
            transits.start_years
        );
    }
    if !(transits.crossing_guard_deg > 0.0 && transits.crossing_guard_deg <= 180.0) {
        anyhow::bail!(
            "transits.crossing_guard_deg must be in (0, 180], got {}",
            transits.crossing_guard_deg
        );
    }
    if !(transits.cluster_gap_days >= 0.0) {
        anyhow::bail!("transits.cluster_gap_days must not be negative, got {}", transits.cluster_gap_days);
    }
    Ok(())
}

/// Check an explicitly configured ephemeris directory. Returns the path of the
/// Chiron data file when it is present.
pub fn validate_ephemeris_dir(dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("ephemeris_path does not exist: {}", dir.display());
    }
    for name in REQUIRED_EPHEMERIS_FILES {
        let p = dir.join(name);
        if !p.exists() {
            anyhow::bail!("Missing ephemeris file: {}", p.display());
        }
    }
    let chiron = dir.join(CHIRON_DATA_FILE);
    if chiron.exists() {
        Ok(Some(chiron))
    } else {
        log::warn!(
            "{} not found in {}; charts will be computed without Chiron",
            CHIRON_DATA_FILE,
            dir.display()
        );
        Ok(None)
    }
}

pub fn validate_engine_settings(settings: &EngineSettings) -> anyhow::Result<()> {
    if !(settings.retrograde_probe_days > 0.0) {
        anyhow::bail!(
            "retrograde_probe_days must be positive, got {}",
            settings.retrograde_probe_days
        );
    }
    if !(settings.node_probe_minutes > 0.0) {
        anyhow::bail!("node_probe_minutes must be positive, got {}", settings.node_probe_minutes);
    }
    validate_transit_window(&settings.transits)?;
    if let Some(dir) = &settings.ephemeris_path {
        validate_ephemeris_dir(dir)?;
    }
    Ok(())
}

pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    let text = read_config_toml_text()?;
    let settings = parse_engine_settings(&text)?;
    validate_engine_settings(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn ephemeris_dir(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_sample_config_parses() {
        let text = include_str!("../../../configs/tyche.toml");
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.transits.step_days, 10.0);
        assert_eq!(settings.transits.end_years, 88.0);
        assert!(validate_transit_window(&settings.transits).is_ok());
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let err = parse_engine_settings("transits = 3").unwrap_err();
        assert!(err.to_string().contains("Failed to parse tyche.toml"));
    }

    #[test]
    fn test_transit_window_checks() {
        let mut transits = TransitScanSettings::default();
        transits.step_days = 0.0;
        assert!(validate_transit_window(&transits).is_err());

        let mut transits = TransitScanSettings::default();
        transits.end_years = transits.start_years;
        assert!(validate_transit_window(&transits).is_err());

        let mut transits = TransitScanSettings::default();
        transits.crossing_guard_deg = 181.0;
        assert!(validate_transit_window(&transits).is_err());
        transits.crossing_guard_deg = 180.0;
        assert!(validate_transit_window(&transits).is_ok());
    }

    #[test]
    fn test_ephemeris_dir_requires_planet_files() {
        let dir = ephemeris_dir(&["sepl_18.se1"]);
        let err = validate_ephemeris_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("semo_18.se1"));
    }

    #[test]
    fn test_missing_chiron_file_is_tolerated() {
        let dir = ephemeris_dir(&["sepl_18.se1", "semo_18.se1"]);
        assert_eq!(validate_ephemeris_dir(dir.path()).unwrap(), None);

        let dir = ephemeris_dir(&["sepl_18.se1", "semo_18.se1", "seas_18.se1"]);
        assert_eq!(
            validate_ephemeris_dir(dir.path()).unwrap(),
            Some(dir.path().join("seas_18.se1"))
        );
    }

    #[test]
    fn test_load_from_env_path() {
        let dir = ephemeris_dir(&["sepl_18.se1", "semo_18.se1"]);
        let config = dir.path().join("tyche.toml");
        fs::write(
            &config,
            format!(
                "ephemeris_path = {:?}\n[transits]\nend_years = 40.0\n",
                dir.path().display().to_string()
            ),
        )
        .unwrap();

        env::set_var(CONFIG_ENV, &config);
        let settings = load_engine_settings();
        env::remove_var(CONFIG_ENV);

        let settings = settings.unwrap();
        assert_eq!(settings.ephemeris_path.as_deref(), Some(dir.path()));
        assert_eq!(settings.transits.end_years, 40.0);
        assert_eq!(settings.transits.start_years, 10.0);
    }

    #[test]
    fn test_settings_with_missing_directory_fail() {
        let settings = EngineSettings {
            ephemeris_path: Some(PathBuf::from("/nonexistent/tyche/ephe")),
            ..EngineSettings::default()
        };
        assert!(validate_engine_settings(&settings).is_err());
        assert!(validate_engine_settings(&EngineSettings::default()).is_ok());
    }
}
