pub mod analysis;
pub mod condition;
pub mod types;

pub use analysis::{analyze_positive_negative, benefic_status, malefic_status, PositiveNegativeAnalysis};
pub use condition::{score_condition, BASE_SCORE};
pub use types::{ConditionFactor, ConditionStatus, Polarity, ScoredPlanet};
