//! Birth data as submitted by the caller and its resolution to an absolute instant.

use crate::error::{ChartError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Birth data. The name is carried through to the result but never used in computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "America/Argentina/Buenos_Aires"
    pub timezone: String,
}

impl BirthInput {
    /// Build from form-style strings: `YYYY-MM-DD` and `HH:MM` or `HH:MM:SS`.
    pub fn parse(
        name: impl Into<String>,
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
    ) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| ChartError::Domain(format!("unparseable date '{}': {}", date, e)))?;
        let time = parse_time(time)?;
        Ok(Self {
            name: name.into(),
            date,
            time,
            latitude,
            longitude,
            timezone: timezone.into(),
        })
    }

    fn zone(&self) -> Result<Tz> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Err(ChartError::Domain("missing timezone".to_string()));
        }
        name.parse::<Tz>()
            .map_err(|_| ChartError::Domain(format!("unknown timezone '{}'", name)))
    }

    /// Resolve the local wall time to UTC.
    ///
    /// Ambiguous local times (end of DST) take the earlier instant; times
    /// skipped by a DST jump are rejected.
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        let zone = self.zone()?;
        let local = NaiveDateTime::new(self.date, self.time);
        zone.from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                ChartError::Domain(format!(
                    "local time {} does not exist in {}",
                    local,
                    self.timezone.trim()
                ))
            })
    }
}

fn parse_time(time: &str) -> Result<NaiveTime> {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| ChartError::Domain(format!("unparseable time '{}': {}", time, e)))
}

/// Whole years elapsed from `birth_date` to `today`; zero for future births.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
