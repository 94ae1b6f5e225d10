use std::fmt;

/// The body an ephemeris lookup refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CelestialBody {
    Sun,
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CelestialBody::Sun => write!(f, "Sun"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolarEvent {
    Rising,
    Transit,
    Setting,
}

impl SolarEvent {
    pub fn all() -> [SolarEvent; 3] {
        [SolarEvent::Rising, SolarEvent::Transit, SolarEvent::Setting]
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolarEvent::Rising => "sunrise",
            SolarEvent::Transit => "transit",
            SolarEvent::Setting => "sunset",
        };
        write!(f, "{}", label)
    }
}
