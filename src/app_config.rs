use crate::domain::ObserverLocation;
use chrono::{DateTime, Utc};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

const GREENWICH_LATITUDE: f64 = 51.4770228;
const GREENWICH_LONGITUDE: f64 = -0.0001147;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    observer: ObserverLocation,
    reference: Option<DateTime<Utc>>,
}

impl AppConfig {
    /// Loads `config.toml`, `config_local.toml` and `SOLAR_` environment variables on top of the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(false))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(Self::environment()),
        )
    }

    /// `SOLAR_OBSERVER__LATITUDE` maps to `observer.latitude`.
    fn environment() -> Environment {
        Environment::with_prefix("SOLAR").prefix_separator("_").separator("__").try_parsing(true)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("observer.latitude", GREENWICH_LATITUDE)?
            .set_default("observer.longitude", GREENWICH_LONGITUDE)?
            .set_default("observer.altitude_m", 0.0)?
            .build()?
            .try_deserialize()
    }

    pub fn observer(&self) -> &ObserverLocation {
        &self.observer
    }

    /// Fixed instant to query at instead of the current time.
    pub fn reference(&self) -> Option<DateTime<Utc>> {
        self.reference
    }
}
