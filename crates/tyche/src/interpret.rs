//! Seam to the interpretive text store.
//!
//! The engine only produces structural facts. Text lives elsewhere and is
//! looked up by (body, event, sign, house) keys through this trait.

use crate::transits::{TransitEvent, TransitKind};
use crate::western::{Body, ZodiacSign};

pub trait InterpretationLookup {
    /// Text for a transit event in the given natal sign and house.
    fn transit_text(&self, body: Body, kind: TransitKind, sign: ZodiacSign, house: u8) -> Option<String>;

    /// Text for a house theme.
    fn house_theme(&self, house: u8) -> Option<String>;
}

/// Lookup that knows no text at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterpretations;

impl InterpretationLookup for NoInterpretations {
    fn transit_text(&self, _body: Body, _kind: TransitKind, _sign: ZodiacSign, _house: u8) -> Option<String> {
        None
    }

    fn house_theme(&self, _house: u8) -> Option<String> {
        None
    }
}

/// Fill each event's description from `lookup`, keeping any existing text on a miss.
pub fn annotate_transits<L: InterpretationLookup + ?Sized>(events: &mut [TransitEvent], lookup: &L) {
    for event in events.iter_mut() {
        if let Some(text) = lookup.transit_text(event.body, event.kind, event.natal_sign, event.natal_house) {
            event.description = Some(text);
        }
    }
}
