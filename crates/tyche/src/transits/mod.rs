pub mod job;
pub mod scanner;
pub mod types;

pub use job::TransitJob;
pub use scanner::{cluster_contacts, scan_key_transits, NatalReference, RawCrossing, TRANSIT_TARGETS};
pub use types::{ContactPhase, TransitEvent, TransitKind, TransitTarget};
