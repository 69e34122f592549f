pub mod angles;
pub mod assembler;
pub mod houses;
pub mod input;
pub mod lots;
pub mod positions;
pub mod profection;
pub mod sect;
pub mod types;

pub use angles::{ascendant_midheaven, ChartAngles};
pub use assembler::ChartEngine;
pub use input::{age_on, BirthInput};
pub use lots::{lot_of_fortune, lot_of_spirit, LotInputs};
pub use profection::{compute_profection_for_age, profection_timeline, ProfectionYear};
pub use sect::is_day_chart;
pub use types::{BodyPosition, ChartResult, HermeticLot, HouseRecord, LotKey, ProfectionState, RulerRef};
