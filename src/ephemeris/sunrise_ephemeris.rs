use crate::domain::{CelestialBody, ObserverLocation, SolarEvent};
use crate::ephemeris::{EphemerisError, EphemerisProvider};
use crate::extensions::date_time_ext::DateTimeExt;
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, SubsecRound, Utc};
use sunrise::{Coordinates, SolarDay};
use tracing::{debug, trace};

/// Days searched before the UTC date of the reference instant.
const SEARCH_DAYS: u64 = 2;

/// Daylight must last longer than this and end this much before a full day.
const MIN_DAYLIGHT_SECONDS: i64 = 60;
const SECONDS_PER_DAY: i64 = 86_400;

/// Ephemeris for the Sun backed by the `sunrise` crate.
///
/// The crate answers per calendar date, so lookups walk backward over the dates around the
/// reference instant and pick the first event that is not after it.
#[derive(Clone, Copy, Default, Debug)]
pub struct SunriseEphemeris;

#[derive(Debug)]
struct SolarDayEvents {
    rising: DateTime<Utc>,
    transit: DateTime<Utc>,
    setting: DateTime<Utc>,
}

impl SolarDayEvents {
    fn time_of(&self, event: SolarEvent) -> DateTime<Utc> {
        match event {
            SolarEvent::Rising => self.rising,
            SolarEvent::Transit => self.transit,
            SolarEvent::Setting => self.setting,
        }
    }
}

impl SunriseEphemeris {
    /// Returns `None` when the Sun does not both rise and set on `date`.
    fn solar_day(&self, location: &ObserverLocation, date: NaiveDate) -> Option<SolarDayEvents> {
        let latitude = location.latitude_degrees().clamp(-90.0, 90.0);
        let longitude = location.longitude_degrees().clamp(-180.0, 180.0);
        let coordinates = Coordinates::new(latitude, longitude)?;
        let solar_day = SolarDay::new(coordinates, date).with_altitude(location.altitude());

        let rising = solar_day.event_time(sunrise::SolarEvent::Sunrise);
        let setting = solar_day.event_time(sunrise::SolarEvent::Sunset);

        // Polar day and night come back as a zero or full-day arc, or as garbage timestamps
        let daylight = setting.signed_duration_since(rising).num_seconds();
        if daylight <= MIN_DAYLIGHT_SECONDS || daylight >= SECONDS_PER_DAY - MIN_DAYLIGHT_SECONDS {
            trace!("No sunrise and sunset on {} for {:?}, daylight lasts {}s", date, location, daylight);
            return None;
        }

        Some(SolarDayEvents {
            rising,
            // Same whole-second precision as rising and setting
            transit: rising.midpoint(&setting).trunc_subsecs(0),
            setting,
        })
    }

    fn previous_event(&self, body: CelestialBody, event: SolarEvent, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError> {
        let reference_date = before.date_naive();
        let latest = reference_date.checked_add_days(Days::new(1)).unwrap_or(reference_date);

        let found = (0..=SEARCH_DAYS + 1)
            .filter_map(|days_back| latest.checked_sub_days(Days::new(days_back)))
            .filter_map(|date| self.solar_day(location, date))
            .map(|day| day.time_of(event))
            .find(|time| *time <= before);

        match found {
            Some(time) => {
                debug!("🌅 Previous {} of the {} before {} is at {}", event, body, before, time);
                Ok(time)
            }
            None => Err(EphemerisError::AstronomicalComputation { body, event, before }),
        }
    }
}

#[async_trait]
impl EphemerisProvider for SunriseEphemeris {
    async fn previous_rising(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError> {
        self.previous_event(body, SolarEvent::Rising, location, before)
    }

    async fn previous_transit(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError> {
        self.previous_event(body, SolarEvent::Transit, location, before)
    }

    async fn previous_setting(&self, body: CelestialBody, location: &ObserverLocation, before: DateTime<Utc>) -> Result<DateTime<Utc>, EphemerisError> {
        self.previous_event(body, SolarEvent::Setting, location, before)
    }
}
