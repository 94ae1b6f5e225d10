use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

/// A point of observation on the Earth's surface.
///
/// Latitude and longitude are kept in radians, altitude in meters above sea level.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl ObserverLocation {
    /// Creates a location at sea level from decimal degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidLongitude(longitude));
        }

        Ok(ObserverLocation {
            latitude: latitude.to_radians().clamp(-FRAC_PI_2, FRAC_PI_2),
            longitude: longitude.to_radians().clamp(-PI, PI),
            altitude: 0.0,
        })
    }

    pub fn with_altitude(mut self, altitude: f64) -> Result<Self, LocationError> {
        if !altitude.is_finite() {
            return Err(LocationError::InvalidAltitude(altitude));
        }
        self.altitude = altitude;
        Ok(self)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude().to_degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude().to_degrees()
    }

    /// In meters
    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("invalid altitude: {0}, must be a finite number of meters")]
    InvalidAltitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn from_degrees_converts_to_radians() {
        let location = ObserverLocation::from_degrees(45.0, -90.0).unwrap();

        assert!((location.latitude() - PI / 4.0).abs() < 1e-12);
        assert!((location.longitude() + PI / 2.0).abs() < 1e-12);
        assert_eq!(location.altitude(), 0.0);
    }

    #[test]
    fn degrees_survive_the_conversion() {
        let location = ObserverLocation::from_degrees(51.4770228, -0.0001147).unwrap();

        assert!((location.latitude_degrees() - 51.4770228).abs() < 1e-9);
        assert!((location.longitude_degrees() + 0.0001147).abs() < 1e-9);
    }

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_the_boundaries(#[case] latitude: f64, #[case] longitude: f64) {
        let location = ObserverLocation::from_degrees(latitude, longitude).unwrap();

        assert!(location.latitude().abs() <= FRAC_PI_2);
        assert!(location.longitude().abs() <= PI);
    }

    #[rstest]
    #[case(90.1)]
    #[case(-91.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_an_invalid_latitude(#[case] latitude: f64) {
        let result = ObserverLocation::from_degrees(latitude, 0.0);

        assert!(matches!(result, Err(LocationError::InvalidLatitude(_))));
    }

    #[rstest]
    #[case(180.5)]
    #[case(-181.0)]
    #[case(f64::NAN)]
    fn rejects_an_invalid_longitude(#[case] longitude: f64) {
        let result = ObserverLocation::from_degrees(0.0, longitude);

        assert!(matches!(result, Err(LocationError::InvalidLongitude(_))));
    }

    #[test]
    fn with_altitude_rejects_non_finite_values() {
        let location = ObserverLocation::from_degrees(0.0, 0.0).unwrap();

        assert_eq!(location.with_altitude(12.5).unwrap().altitude(), 12.5);
        assert!(matches!(location.with_altitude(f64::NAN), Err(LocationError::InvalidAltitude(_))));
        assert!(matches!(location.with_altitude(f64::NEG_INFINITY), Err(LocationError::InvalidAltitude(_))));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        assert_eq!(LocationError::InvalidLatitude(95.0).to_string(), "invalid latitude: 95, must be between -90 and 90");
        assert_eq!(LocationError::InvalidLongitude(-200.0).to_string(), "invalid longitude: -200, must be between -180 and 180");
    }
}
