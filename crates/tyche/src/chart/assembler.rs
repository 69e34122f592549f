//! Chart composition root.

use crate::angles::sign_index;
use crate::chart::angles::ascendant_midheaven;
use crate::chart::houses::build_houses;
use crate::chart::input::{age_on, BirthInput};
use crate::chart::lots::{compute_lots, LotInputs};
use crate::chart::positions::PositionResolver;
use crate::chart::profection::compute_profection_for_age;
use crate::chart::sect::is_day_chart;
use crate::chart::types::ChartResult;
use crate::ephemeris::{resolve_ephemeris_path, ChironProvider, Ephemeris, SwissEphemerisAdapter};
use crate::error::{ChartError, Result};
use crate::settings::EngineSettings;
use crate::time::datetime_to_julian_day;
use crate::transits::{scan_key_transits, NatalReference, TransitEvent, TransitJob};
use crate::western::{Body, ZodiacSign};
use chrono::{NaiveDate, Utc};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Owns the ephemeris collaborators and settings; every chart is computed
/// from scratch with no state shared between calls.
pub struct ChartEngine<E: Ephemeris> {
    ephemeris: E,
    chiron: Option<Arc<dyn ChironProvider>>,
    settings: EngineSettings,
}

impl ChartEngine<SwissEphemerisAdapter> {
    /// Swiss Ephemeris backed engine with no Chiron provider attached.
    pub fn swiss(settings: EngineSettings) -> Result<Self> {
        let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())?;
        Ok(Self::new(adapter, settings))
    }
}

impl<E: Ephemeris> ChartEngine<E> {
    pub fn new(ephemeris: E, settings: EngineSettings) -> Self {
        Self {
            ephemeris,
            chiron: None,
            settings,
        }
    }

    pub fn with_chiron(mut self, provider: Arc<dyn ChironProvider>) -> Self {
        self.chiron = Some(provider);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Compute the chart with the profection taken for today's date.
    pub async fn compute_chart(&self, input: &BirthInput) -> Result<ChartResult> {
        self.compute_chart_at(input, Utc::now().date_naive()).await
    }

    /// Compute the chart with the profection taken for `today`.
    pub async fn compute_chart_at(&self, input: &BirthInput, today: NaiveDate) -> Result<ChartResult> {
        let chiron = self.ready_chiron().await;
        self.assemble(input, today, chiron)
    }

    /// Initialize the Chiron provider, or `None` if it is absent or fails.
    async fn ready_chiron(&self) -> Option<&dyn ChironProvider> {
        let provider = self.chiron.as_deref()?;
        let path = resolve_ephemeris_path(self.settings.ephemeris_path.as_deref());
        match provider.initialize(&path).await {
            Ok(()) => Some(provider),
            Err(e) => {
                log::warn!("Chiron unavailable, omitting it from the chart: {}", e);
                None
            }
        }
    }

    /// Build the chart synchronously. Chiron is included only if `chiron` is
    /// given and answers; its failure never fails the chart.
    pub fn assemble(
        &self,
        input: &BirthInput,
        today: NaiveDate,
        chiron: Option<&dyn ChironProvider>,
    ) -> Result<ChartResult> {
        self.check_step_sizes()?;
        let birth_instant = input.to_utc()?;
        let jd = datetime_to_julian_day(birth_instant);

        let angles = ascendant_midheaven(jd, input.latitude, input.longitude)?;
        let asc_sign = sign_index(angles.ascendant);

        let resolver = PositionResolver::new(&self.ephemeris, jd, asc_sign, self.settings.retrograde_probe_days);
        let mut positions = resolver.resolve_planets()?;
        positions.extend(resolver.resolve_nodes(self.settings.node_probe_minutes, self.settings.node_speed)?);

        if let Some(provider) = chiron {
            match resolver.resolve_chiron(provider) {
                Ok(pos) => positions.push(pos),
                Err(e) => log::warn!("Chiron query failed, omitting it from the chart: {}", e),
            }
        }

        positions.push(resolver.resolve_angle(Body::Ascendant, angles.ascendant));
        positions.push(resolver.resolve_angle(Body::Midheaven, angles.midheaven));

        let longitude_of = |body: Body| -> Result<f64> {
            positions
                .iter()
                .find(|p| p.body == body)
                .map(|p| p.longitude)
                .ok_or_else(|| ChartError::Domain(format!("{} was not resolved", body)))
        };

        let sun = longitude_of(Body::Sun)?;
        let is_day = is_day_chart(angles.ascendant, sun);
        let lot_inputs = LotInputs {
            ascendant: angles.ascendant,
            sun,
            moon: longitude_of(Body::Moon)?,
            mercury: longitude_of(Body::Mercury)?,
            venus: longitude_of(Body::Venus)?,
            mars: longitude_of(Body::Mars)?,
            jupiter: longitude_of(Body::Jupiter)?,
            saturn: longitude_of(Body::Saturn)?,
        };
        let hermetic_lots = compute_lots(is_day, &lot_inputs, asc_sign);

        let ascendant_sign = ZodiacSign::from_index(asc_sign);
        let houses = build_houses(ascendant_sign, &positions);
        let profection = compute_profection_for_age(age_on(input.date, today), ascendant_sign);

        log::info!(
            "chart for {}: {} rising, {} chart, {} bodies",
            input.name,
            ascendant_sign,
            if is_day { "day" } else { "night" },
            positions.len()
        );

        Ok(ChartResult {
            name: input.name.clone(),
            birth_instant,
            positions,
            houses,
            profection,
            hermetic_lots,
            is_day_chart: is_day,
            ascendant_sign,
            zodiac_offset: asc_sign as f64 * 30.0,
        })
    }

    /// Finite-difference steps must be positive, or speeds and nodes come out NaN.
    fn check_step_sizes(&self) -> Result<()> {
        let steps = [
            ("retrograde_probe_days", self.settings.retrograde_probe_days),
            ("node_probe_minutes", self.settings.node_probe_minutes),
        ];
        for (name, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(ChartError::Domain(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }

    fn natal_reference(&self, input: &BirthInput) -> Result<NatalReference> {
        self.check_step_sizes()?;
        let birth_jd = datetime_to_julian_day(input.to_utc()?);
        NatalReference::compute(
            &self.ephemeris,
            birth_jd,
            input.latitude,
            input.longitude,
            self.settings.node_probe_minutes,
        )
    }

    /// Returns and ascendant crossings over the configured window, on the calling thread.
    pub fn compute_key_transits(&self, input: &BirthInput) -> Result<Vec<TransitEvent>> {
        self.compute_key_transits_with(input, None)
    }

    fn compute_key_transits_with(&self, input: &BirthInput, cancel: Option<&AtomicBool>) -> Result<Vec<TransitEvent>> {
        let natal = self.natal_reference(input)?;
        scan_key_transits(
            &self.ephemeris,
            &natal,
            &self.settings.transits,
            self.settings.node_probe_minutes,
            cancel,
        )
    }
}

impl<E: Ephemeris + 'static> ChartEngine<E> {
    /// Run the transit scan on the blocking pool. Must be called within a tokio runtime.
    pub fn spawn_key_transits(self: Arc<Self>, input: BirthInput) -> TransitJob {
        TransitJob::spawn(move |cancel| self.compute_key_transits_with(&input, Some(&*cancel)))
    }
}
