pub mod dignities;
pub mod houses;
pub mod rulers;
pub mod types;

pub use dignities::{essential_dignity, EssentialDignity};
pub use houses::{house_strength, house_theme_key, joy_house, HouseStrength};
pub use rulers::{principal_ruler, sign_rulers, traditional_ruler, RulerKind, SignRuler};
pub use types::{Body, Element, ZodiacSign};
