pub mod houses;
pub mod zodiac;

pub use houses::{HouseCusps, HOUSE_COUNT};
pub use zodiac::{angular_separation, classify, harmonic_longitude, normalize, Sign};
