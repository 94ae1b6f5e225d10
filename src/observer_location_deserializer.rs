use crate::domain::{LocationError, ObserverLocation};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for ObserverLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude_m: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        ObserverLocation::from_degrees(inner.latitude, inner.longitude)
            .and_then(|location| location.with_altitude(inner.altitude_m))
            .map_err(|err: LocationError| Error::custom(format!("invalid observer location: {}", err)))
    }
}
