//! Annual profections.

use crate::chart::types::ProfectionState;
use crate::western::{house_theme_key, principal_ruler, Body, ZodiacSign};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Profected house and time lord for a given age.
///
/// The activated house repeats every 12 years.
pub fn compute_profection_for_age(age: u32, ascendant_sign: ZodiacSign) -> ProfectionState {
    let advanced = (age % 12) as u8;
    let house_number = advanced + 1;
    let sign = ascendant_sign.offset(advanced);
    ProfectionState {
        age,
        house_number,
        sign,
        time_lord: principal_ruler(sign),
        theme_key: house_theme_key(house_number).to_string(),
    }
}

/// One year of a profection timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfectionYear {
    pub age: u32,
    pub house_number: u8,
    pub sign: ZodiacSign,
    pub time_lord: Body,
    /// Birthday opening this profection year
    pub starts: NaiveDate,
    /// Birthday closing it
    pub ends: NaiveDate,
    pub is_current: bool,
}

/// The birthday in `year`; Feb 29 births fall back to Feb 28 in common years.
fn anniversary(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth_date.month(), 28))
}

/// Profection years from `current_age - span` to `current_age + span`.
pub fn profection_timeline(
    birth_date: NaiveDate,
    ascendant_sign: ZodiacSign,
    current_age: u32,
    span: u32,
) -> Vec<ProfectionYear> {
    let first = current_age.saturating_sub(span);
    let last = current_age.saturating_add(span);

    (first..=last)
        .filter_map(|age| {
            let year = birth_date.year().checked_add(i32::try_from(age).ok()?)?;
            let starts = anniversary(birth_date, year)?;
            let ends = anniversary(birth_date, year.checked_add(1)?)?;
            let state = compute_profection_for_age(age, ascendant_sign);
            Some(ProfectionYear {
                age,
                house_number: state.house_number,
                sign: state.sign,
                time_lord: state.time_lord,
                starts,
                ends,
                is_current: age == current_age,
            })
        })
        .collect()
}
