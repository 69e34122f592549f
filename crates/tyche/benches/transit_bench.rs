use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tyche::ephemeris::EclipticPosition;
use tyche::time::{DAYS_PER_YEAR, J2000_JD};
use tyche::transits::{cluster_contacts, scan_key_transits, NatalReference, RawCrossing, TransitTarget};
use tyche::{Body, Ephemeris, EphemerisError, TransitKind, TransitScanSettings};

/// Mean motions only; enough to give the scanner realistic crossing counts.
struct MeanMotion;

impl Ephemeris for MeanMotion {
    fn ecliptic_position(&self, body: Body, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        let t = jd_ut - J2000_JD;
        let (lon0, period_years) = match body {
            Body::Jupiter => (34.4, 11.86),
            Body::Saturn => (50.1, 29.46),
            Body::Uranus => (314.0, 84.01),
            Body::Neptune => (303.2, 164.8),
            Body::Pluto => (251.5, 248.0),
            Body::Moon => {
                let node = (125.0 - 0.053 * t).to_radians();
                let u = (13.176 * t).to_radians();
                let inc = 5.145_f64.to_radians();
                let (x0, y0, z0) = (u.cos(), u.sin() * inc.cos(), u.sin() * inc.sin());
                let x = node.cos() * x0 - node.sin() * y0;
                let y = node.sin() * x0 + node.cos() * y0;
                return Ok(EclipticPosition {
                    lon: y.atan2(x).to_degrees().rem_euclid(360.0),
                    lat: z0.asin().to_degrees(),
                });
            }
            other => return Err(EphemerisError::UnsupportedBody { body: other }),
        };
        Ok(EclipticPosition {
            lon: (lon0 + t * 360.0 / (period_years * DAYS_PER_YEAR)).rem_euclid(360.0),
            lat: 0.0,
        })
    }
}

fn bench_full_scan(c: &mut Criterion) {
    let natal = NatalReference::compute(&MeanMotion, J2000_JD, 40.7, -74.0, 2.0).unwrap();
    let settings = TransitScanSettings::default();

    c.bench_function("scan_key_transits_78y", |b| {
        b.iter(|| scan_key_transits(black_box(&MeanMotion), black_box(&natal), &settings, 2.0, None))
    });
}

fn bench_cluster_contacts(c: &mut Criterion) {
    let target = TransitTarget {
        body: Body::Saturn,
        kind: TransitKind::Return,
    };
    let raw: Vec<RawCrossing> = (0..300)
        .map(|i| RawCrossing {
            target,
            jd: J2000_JD + (i / 3) as f64 * 10_000.0 + (i % 3) as f64 * 120.0,
        })
        .collect();

    c.bench_function("cluster_contacts", |b| {
        b.iter(|| cluster_contacts(black_box(&raw), 730.5))
    });
}

criterion_group!(benches, bench_full_scan, bench_cluster_contacts);
criterion_main!(benches);
