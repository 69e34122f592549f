pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod interpret;
pub mod scoring;
pub mod settings;
pub mod time;
pub mod transits;
pub mod western;

pub use chart::{
    age_on, compute_profection_for_age, profection_timeline, BirthInput, BodyPosition, ChartEngine,
    ChartResult, HermeticLot, HouseRecord, LotKey, ProfectionState, ProfectionYear,
};
pub use error::{ChartError, Result};
pub use ephemeris::{ChironProvider, Ephemeris, EphemerisError, SwissChironProvider, SwissEphemerisAdapter};
pub use interpret::{annotate_transits, InterpretationLookup, NoInterpretations};
pub use scoring::{
    analyze_positive_negative, score_condition, ConditionStatus, PositiveNegativeAnalysis, ScoredPlanet,
};
pub use settings::{EngineSettings, TransitScanSettings};
pub use transits::{ContactPhase, TransitEvent, TransitJob, TransitKind};
pub use western::{Body, Element, EssentialDignity, RulerKind, ZodiacSign};
