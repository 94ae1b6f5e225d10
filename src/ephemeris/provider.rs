use crate::domain::{CelestialBody, ObserverLocation, SolarEvent};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Source of rise, transit and set times for a body as seen from a location.
///
/// Every lookup returns the latest occurrence at or before `before`.
#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    async fn previous_rising(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError>;

    async fn previous_transit(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError>;

    async fn previous_setting(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("could not determine the previous {event} of the {body} at or before {before}")]
    AstronomicalComputation {
        body: CelestialBody,
        event: SolarEvent,
        before: DateTime<Utc>,
    },
}

impl EphemerisError {
    pub fn event(&self) -> SolarEvent {
        match self {
            EphemerisError::AstronomicalComputation { event, .. } => *event,
        }
    }
}
