//! Julian day conversion, sidereal time and obliquity.

use crate::angles::normalize_degrees;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2451545.0;

/// Julian day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per Julian year, used for the transit window and cluster spans.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert a UTC instant to a Julian day (UT).
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Convert a Julian day (UT) back to a UTC instant, rounded to the millisecond.
///
/// Returns `None` outside chrono's representable range.
pub fn julian_day_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

/// Calendar date (UTC) of a Julian day.
pub fn julian_day_to_date(jd: f64) -> Option<NaiveDate> {
    julian_day_to_datetime(jd).map(|dt| dt.date_naive())
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

/// Greenwich mean sidereal time in degrees [0, 360).
///
/// IAU 1982 expression as given by Meeus, eq. 12.4.
pub fn greenwich_sidereal_degrees(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let theta = 280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees(theta)
}

/// Right ascension of the local meridian (RAMC) in degrees, east longitude positive.
pub fn local_sidereal_degrees(jd: f64, longitude_east: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_degrees(jd) + longitude_east)
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 series, truncated at T³).
pub fn mean_obliquity_degrees(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    23.4392911 - (46.8150 * t + 0.00059 * t * t - 0.001813 * t * t * t) / 3600.0
}
