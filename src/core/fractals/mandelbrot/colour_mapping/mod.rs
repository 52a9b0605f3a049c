pub mod clock;
pub mod hsl;
pub mod kinds;
pub mod map;
pub mod maps;

pub use clock::{Clock, FixedClock, SystemClock};
pub use kinds::ColourScheme;
pub use map::{SchemeColourMap, colour_at, colour_for};
