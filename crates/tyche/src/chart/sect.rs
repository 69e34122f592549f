//! Day/night sect.
//!
//! A whole-sign approximation: the chart is diurnal when the Sun lies in the
//! half of the zodiac running from the descendant over the midheaven back to
//! the ascendant. No horizon altitude is computed.

use crate::angles::normalize_degrees;

pub fn is_day_chart(ascendant: f64, sun: f64) -> bool {
    normalize_degrees(sun - ascendant) >= 180.0
}
