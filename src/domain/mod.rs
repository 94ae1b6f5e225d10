mod observer_location;
mod solar_event;
mod solar_event_result;

pub use observer_location::{LocationError, ObserverLocation};
pub use solar_event::{CelestialBody, SolarEvent};
pub use solar_event_result::SolarEventResult;
