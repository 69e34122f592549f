#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tyche::chart::positions::place;
use tyche::ephemeris::EclipticPosition;
use tyche::{Body, BodyPosition, ChartResult, ChironProvider, Ephemeris, EphemerisError};

/// Route `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type Track = Box<dyn Fn(f64) -> EclipticPosition + Send + Sync>;

/// Synthetic ephemeris: one closure of Julian day per body.
#[derive(Default)]
pub struct ScriptedEphemeris {
    tracks: HashMap<Body, Track>,
}

impl ScriptedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, body: Body, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.tracks.insert(
            body,
            Box::new(move |jd| EclipticPosition {
                lon: f(jd).rem_euclid(360.0),
                lat: 0.0,
            }),
        );
        self
    }

    pub fn fixed(self, body: Body, lon: f64) -> Self {
        self.with(body, move |_| lon)
    }

    /// Uniform motion through `lon_at_epoch` at `epoch`.
    pub fn linear(self, body: Body, epoch: f64, lon_at_epoch: f64, deg_per_day: f64) -> Self {
        self.with(body, move |jd| lon_at_epoch + (jd - epoch) * deg_per_day)
    }

    /// A Moon on a great circle inclined by `inclination` whose ascending node is at `node`.
    pub fn inclined_moon(mut self, node: f64, inclination: f64, epoch: f64) -> Self {
        self.tracks.insert(
            Body::Moon,
            Box::new(move |jd| moon_on_orbit(node, inclination, 13.176 * (jd - epoch))),
        );
        self
    }

    /// Like `inclined_moon`, with the node regressing at `node_rate` degrees/day.
    pub fn precessing_moon(mut self, node_at_epoch: f64, node_rate: f64, inclination: f64, epoch: f64) -> Self {
        self.tracks.insert(
            Body::Moon,
            Box::new(move |jd| {
                let node = node_at_epoch + node_rate * (jd - epoch);
                moon_on_orbit(node, inclination, 13.176 * (jd - epoch))
            }),
        );
        self
    }

    /// Every ephemeris body at a fixed longitude, Moon on a 5 degree orbit noded at 0.
    pub fn all_fixed(longitudes: &[(Body, f64)]) -> Self {
        let mut eph = Self::new().inclined_moon(0.0, 5.0, 2451545.0);
        for (body, lon) in longitudes {
            eph = eph.fixed(*body, *lon);
        }
        eph
    }
}

/// Position at argument of latitude `u` on an orbit with node `node` and inclination `inc`.
pub fn moon_on_orbit(node: f64, inc: f64, u: f64) -> EclipticPosition {
    let (o, i, u) = (node.to_radians(), inc.to_radians(), u.to_radians());
    let (x0, y0, z0) = (u.cos(), u.sin() * i.cos(), u.sin() * i.sin());
    let x = o.cos() * x0 - o.sin() * y0;
    let y = o.sin() * x0 + o.cos() * y0;
    EclipticPosition {
        lon: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat: z0.asin().to_degrees(),
    }
}

impl Ephemeris for ScriptedEphemeris {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        self.tracks
            .get(&body)
            .map(|f| f(jd_ut))
            .ok_or(EphemerisError::UnsupportedBody { body })
    }
}

/// Chiron stand-in that either works at a fixed longitude or refuses to load.
pub struct StubChiron {
    pub longitude: f64,
    pub available: bool,
    pub init_calls: AtomicUsize,
}

impl StubChiron {
    pub fn working(longitude: f64) -> Self {
        Self {
            longitude,
            available: true,
            init_calls: AtomicUsize::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            longitude: 0.0,
            available: false,
            init_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChironProvider for StubChiron {
    async fn initialize(&self, ephemeris_path: &Path) -> Result<(), EphemerisError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.available {
            Ok(())
        } else {
            Err(EphemerisError::FileNotFound {
                path: ephemeris_path.display().to_string(),
                message: "stub".to_string(),
            })
        }
    }

    fn longitude_at(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(self.longitude)
    }
}

/// A hand-built chart for scoring tests. Speeds are +1 unless listed in `retrograde`.
pub fn chart_from(ascendant: f64, is_day: bool, bodies: &[(Body, f64)], retrograde: &[Body]) -> ChartResult {
    let asc_sign = tyche::angles::sign_index(ascendant);
    let mut positions: Vec<BodyPosition> = bodies
        .iter()
        .map(|(body, lon)| {
            let speed = if retrograde.contains(body) { -0.5 } else { 1.0 };
            place(*body, *lon, speed, asc_sign)
        })
        .collect();
    positions.push(place(Body::Ascendant, ascendant, 0.0, asc_sign));

    let ascendant_sign = tyche::ZodiacSign::from_index(asc_sign);
    ChartResult {
        name: "Fixture".to_string(),
        birth_instant: chrono::DateTime::<chrono::Utc>::default(),
        houses: tyche::chart::houses::build_houses(ascendant_sign, &positions),
        positions,
        profection: tyche::compute_profection_for_age(0, ascendant_sign),
        hermetic_lots: Vec::new(),
        is_day_chart: is_day,
        ascendant_sign,
        zodiac_offset: asc_sign as f64 * 30.0,
    }
}
