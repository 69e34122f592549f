pub mod calculator;
pub mod types;

pub use calculator::{sign_distance, AspectCalculator, DEGREE_ORB};
pub use types::SignRelation;
