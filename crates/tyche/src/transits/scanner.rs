//! Long-horizon return and ascendant-crossing scan.
//!
//! The scan walks forward in fixed steps and watches the signed difference
//! between each transiting body and its natal reference point. A sign flip of
//! that difference with a small magnitude on the new side is a crossing; a flip
//! far from zero is the +180/-180 wrap and is ignored. Raw crossings of the
//! same target that sit close together are one retrograde multi-pass contact.

use crate::angles::{sign_index, signed_delta, whole_sign_house};
use crate::chart::angles::ascendant_midheaven;
use crate::ephemeris::{lunar_nodes, Ephemeris, EphemerisError};
use crate::error::{ChartError, Result};
use crate::settings::TransitScanSettings;
use crate::time::{julian_day_to_date, DAYS_PER_YEAR};
use crate::transits::types::{ContactPhase, TransitEvent, TransitKind, TransitTarget};
use crate::western::{Body, ZodiacSign};
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

const fn target(body: Body, kind: TransitKind) -> TransitTarget {
    TransitTarget { body, kind }
}

/// Tracked targets in reporting order
pub const TRANSIT_TARGETS: [TransitTarget; 9] = [
    target(Body::Saturn, TransitKind::Return),
    target(Body::Saturn, TransitKind::AscendantConjunction),
    target(Body::Jupiter, TransitKind::Return),
    target(Body::Jupiter, TransitKind::AscendantConjunction),
    target(Body::Uranus, TransitKind::Return),
    target(Body::Uranus, TransitKind::AscendantConjunction),
    target(Body::NorthNode, TransitKind::Return),
    target(Body::Neptune, TransitKind::AscendantConjunction),
    target(Body::Pluto, TransitKind::AscendantConjunction),
];

const SCANNED_BODIES: [Body; 6] = [
    Body::Saturn,
    Body::Jupiter,
    Body::Uranus,
    Body::NorthNode,
    Body::Neptune,
    Body::Pluto,
];

/// Longitude of a scanned body; the north node comes from lunar geometry.
fn scanned_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    jd_ut: f64,
    node_probe_minutes: f64,
) -> std::result::Result<f64, EphemerisError> {
    match body {
        Body::NorthNode => lunar_nodes(ephemeris, jd_ut, node_probe_minutes).map(|n| n.north),
        other => ephemeris.longitude(other, jd_ut),
    }
}

/// Natal points the scan measures against
#[derive(Debug, Clone, PartialEq)]
pub struct NatalReference {
    pub birth_jd: f64,
    pub ascendant: f64,
    pub ascendant_sign: u8,
    /// Natal longitude per scanned body
    pub longitudes: HashMap<Body, f64>,
}

impl NatalReference {
    /// Resolve the natal ascendant and the natal longitude of every scanned body.
    pub fn compute<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        birth_jd: f64,
        latitude: f64,
        longitude: f64,
        node_probe_minutes: f64,
    ) -> Result<Self> {
        let angles = ascendant_midheaven(birth_jd, latitude, longitude)?;
        let mut longitudes = HashMap::new();
        for body in SCANNED_BODIES {
            longitudes.insert(body, scanned_longitude(ephemeris, body, birth_jd, node_probe_minutes)?);
        }
        Ok(Self {
            birth_jd,
            ascendant: angles.ascendant,
            ascendant_sign: sign_index(angles.ascendant),
            longitudes,
        })
    }

    /// The natal point a target is measured against.
    pub fn reference_longitude(&self, target: TransitTarget) -> Option<f64> {
        match target.kind {
            TransitKind::Return => self.longitudes.get(&target.body).copied(),
            TransitKind::AscendantConjunction => Some(self.ascendant),
        }
    }

    fn context(&self, target: TransitTarget, reference: f64) -> (ZodiacSign, u8) {
        let sign = sign_index(reference);
        let house = match target.kind {
            TransitKind::AscendantConjunction => 1,
            TransitKind::Return => whole_sign_house(sign, self.ascendant_sign),
        };
        (ZodiacSign::from_index(sign), house)
    }
}

/// A single detected sign flip, before clustering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawCrossing {
    pub target: TransitTarget,
    pub jd: f64,
}

fn validate(settings: &TransitScanSettings) -> Result<()> {
    if !(settings.step_days > 0.0) {
        return Err(ChartError::Domain(format!(
            "transit step must be positive, got {}",
            settings.step_days
        )));
    }
    if !(settings.end_years > settings.start_years) {
        return Err(ChartError::Domain(format!(
            "transit window is empty: {} to {} years",
            settings.start_years, settings.end_years
        )));
    }
    Ok(())
}

/// Walk the scan window and collect every raw crossing in step order.
pub fn find_crossings<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    natal: &NatalReference,
    settings: &TransitScanSettings,
    node_probe_minutes: f64,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<RawCrossing>> {
    validate(settings)?;

    let start = natal.birth_jd + settings.start_years * DAYS_PER_YEAR;
    let end = natal.birth_jd + settings.end_years * DAYS_PER_YEAR;
    let steps = ((end - start) / settings.step_days).floor() as usize;

    let mut previous: Vec<Option<f64>> = vec![None; TRANSIT_TARGETS.len()];
    let mut current: HashMap<Body, f64> = HashMap::with_capacity(SCANNED_BODIES.len());
    let mut crossings = Vec::new();
    let mut last_decade = None;

    for i in 0..=steps {
        if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
            return Err(ChartError::ScanCancelled);
        }

        let jd = start + i as f64 * settings.step_days;
        let decade = ((jd - natal.birth_jd) / DAYS_PER_YEAR / 10.0).floor() as i64;
        if last_decade != Some(decade) {
            log::debug!("transit scan at age {}0, {} crossings so far", decade, crossings.len());
            last_decade = Some(decade);
        }

        current.clear();
        for body in SCANNED_BODIES {
            current.insert(body, scanned_longitude(ephemeris, body, jd, node_probe_minutes)?);
        }

        for (slot, target) in TRANSIT_TARGETS.iter().enumerate() {
            let (Some(reference), Some(now)) =
                (natal.reference_longitude(*target), current.get(&target.body).copied())
            else {
                continue;
            };
            let diff = signed_delta(now, reference);
            if let Some(prev) = previous[slot] {
                if (prev < 0.0) != (diff < 0.0) && diff.abs() < settings.crossing_guard_deg {
                    crossings.push(RawCrossing { target: *target, jd });
                }
            }
            previous[slot] = Some(diff);
        }
    }

    Ok(crossings)
}

/// Group crossings per target and label multi-pass contacts.
///
/// Consecutive crossings closer than `gap_days` belong to one contact. Labels
/// are only attached to contacts of three or more passes.
pub fn cluster_contacts(crossings: &[RawCrossing], gap_days: f64) -> Vec<(RawCrossing, Option<ContactPhase>)> {
    let mut out = Vec::with_capacity(crossings.len());

    for target in TRANSIT_TARGETS {
        let hits: Vec<RawCrossing> = crossings.iter().filter(|c| c.target == target).copied().collect();

        let mut clusters: Vec<Vec<RawCrossing>> = Vec::new();
        for hit in hits {
            match clusters.last_mut() {
                Some(cluster) if cluster.last().map_or(false, |last| hit.jd - last.jd < gap_days) => {
                    cluster.push(hit)
                }
                _ => clusters.push(vec![hit]),
            }
        }

        for cluster in clusters {
            let n = cluster.len();
            for (i, hit) in cluster.into_iter().enumerate() {
                let phase = if n < 3 {
                    None
                } else if i == 0 {
                    Some(ContactPhase::First)
                } else if i == n - 1 {
                    Some(ContactPhase::Final)
                } else {
                    Some(ContactPhase::Retrograde)
                };
                out.push((hit, phase));
            }
        }
    }

    out
}

/// Scan the configured window after birth for returns and ascendant crossings.
///
/// An empty list is a valid outcome. The cancel flag is checked once per step.
pub fn scan_key_transits<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    natal: &NatalReference,
    settings: &TransitScanSettings,
    node_probe_minutes: f64,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<TransitEvent>> {
    let crossings = find_crossings(ephemeris, natal, settings, node_probe_minutes, cancel)?;

    let mut events = Vec::with_capacity(crossings.len());
    for (hit, phase) in cluster_contacts(&crossings, settings.cluster_gap_days) {
        let reference = natal
            .reference_longitude(hit.target)
            .ok_or_else(|| ChartError::ScanAborted(format!("no natal point for {}", hit.target.body)))?;
        let (natal_sign, natal_house) = natal.context(hit.target, reference);
        let date = julian_day_to_date(hit.jd)
            .ok_or_else(|| ChartError::ScanAborted(format!("JD {} is outside the calendar range", hit.jd)))?;
        events.push(TransitEvent {
            jd: hit.jd,
            date,
            year: date.year(),
            month: date.month(),
            body: hit.target.body,
            kind: hit.target.kind,
            phase,
            natal_sign,
            natal_house,
            description: None,
        });
    }

    events.sort_by_key(|e| (e.year, e.month));
    log::info!("transit scan found {} events", events.len());
    Ok(events)
}
