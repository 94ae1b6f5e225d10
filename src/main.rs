use crate::app_config::AppConfig;
use crate::ephemeris::SunriseEphemeris;
use crate::query::query;
use chrono::{SubsecRound, Utc};
use tracing::{error, info};

mod app_config;
mod domain;
mod ephemeris;
mod extensions;
mod observer_location_deserializer;
mod query;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let observer = config.observer();
    let reference = config.reference().unwrap_or_else(|| Utc::now().trunc_subsecs(0));
    info!(
        "🔭 Observing from {:.7}°, {:.7}° at {}m",
        observer.latitude_degrees(),
        observer.longitude_degrees(),
        observer.altitude()
    );

    let result = query(observer, reference, &SunriseEphemeris)
        .await
        .inspect_err(|err| error!(event = %err.event(), "⚠️ {}", err))?;

    println!("{}", result);

    Ok(())
}
