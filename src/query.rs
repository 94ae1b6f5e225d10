use crate::domain::{CelestialBody, ObserverLocation, SolarEventResult};
use crate::ephemeris::{EphemerisError, EphemerisProvider};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Looks up the most recent sunrise, transit and sunset at or before `reference`.
///
/// The three lookups run concurrently. The first failure fails the whole query.
#[instrument(skip(location, provider), fields(latitude = location.latitude_degrees(), longitude = location.longitude_degrees()))]
pub async fn query<P>(location: &ObserverLocation, reference: DateTime<Utc>, provider: &P) -> Result<SolarEventResult, EphemerisError>
where
    P: EphemerisProvider + ?Sized,
{
    let (rising, transit, setting) = tokio::try_join!(
        provider.previous_rising(CelestialBody::Sun, location, reference),
        provider.previous_transit(CelestialBody::Sun, location, reference),
        provider.previous_setting(CelestialBody::Sun, location, reference),
    )?;

    debug!("☀️ Resolved solar events for {}", reference);
    Ok(SolarEventResult::new(reference, rising, transit, setting))
}
