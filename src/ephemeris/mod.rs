mod provider;
mod sunrise_ephemeris;

pub use provider::{EphemerisError, EphemerisProvider};
pub use sunrise_ephemeris::SunriseEphemeris;
