use crate::domain::SolarEvent;
use crate::extensions::date_time_ext::DateTimeExt;
use chrono::{DateTime, Utc};
use std::fmt;

/// The most recent solar events at or before a reference instant.
#[derive(Clone, PartialEq, Debug)]
pub struct SolarEventResult {
    reference: DateTime<Utc>,
    rising: DateTime<Utc>,
    transit: DateTime<Utc>,
    setting: DateTime<Utc>,
}

impl SolarEventResult {
    pub fn new(reference: DateTime<Utc>, rising: DateTime<Utc>, transit: DateTime<Utc>, setting: DateTime<Utc>) -> Self {
        SolarEventResult {
            reference,
            rising,
            transit,
            setting,
        }
    }

    #[cfg(test)]
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    #[cfg(test)]
    pub fn rising(&self) -> DateTime<Utc> {
        self.rising
    }

    #[cfg(test)]
    pub fn transit(&self) -> DateTime<Utc> {
        self.transit
    }

    #[cfg(test)]
    pub fn setting(&self) -> DateTime<Utc> {
        self.setting
    }

    pub fn event(&self, event: SolarEvent) -> DateTime<Utc> {
        match event {
            SolarEvent::Rising => self.rising,
            SolarEvent::Transit => self.transit,
            SolarEvent::Setting => self.setting,
        }
    }
}

impl fmt::Display for SolarEventResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC: {}", self.reference.to_ephem_string())?;
        for event in SolarEvent::all() {
            write!(f, "\n{}: {}", event, self.event(event).to_ephem_string())?;
        }
        Ok(())
    }
}
