//! Enum-dispatched climate source.
//!
//! Async methods are not dyn-compatible, so the engine holds a
//! [`ClimateSource`] enum instead of a trait object.

use terrapet_types::ClimateReading;

use crate::FALLBACK_READING;
use crate::client::{ClimateClientConfig, NasaClimateClient};
use crate::error::ClimateError;

/// Where the engine gets its climate indicators from.
#[derive(Debug)]
pub enum ClimateSource {
    /// Live NASA GISS datasets with per-metric fallback.
    Nasa(Box<NasaClimateClient>),
    /// A constant reading (offline mode and tests).
    Fixed(ClimateReading),
}

impl ClimateSource {
    /// A live NASA GISS source.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Client`] if the HTTP client cannot be built.
    pub fn nasa(config: &ClimateClientConfig) -> Result<Self, ClimateError> {
        Ok(Self::Nasa(Box::new(NasaClimateClient::new(config)?)))
    }

    /// A source that always yields the fallback constants.
    pub const fn fallback() -> Self {
        Self::Fixed(FALLBACK_READING)
    }

    /// Current CO2 concentration in ppm. Never fails.
    pub async fn fetch_co2(&self) -> f64 {
        match self {
            Self::Nasa(client) => client.fetch_co2().await,
            Self::Fixed(reading) => reading.co2_ppm,
        }
    }

    /// Current temperature anomaly. Never fails.
    pub async fn fetch_temperature(&self) -> f64 {
        match self {
            Self::Nasa(client) => client.fetch_temperature().await,
            Self::Fixed(reading) => reading.temp_anomaly,
        }
    }

    /// Fetch both indicators concurrently.
    ///
    /// Each metric applies its own fallback, so one failing upstream does
    /// not affect the other.
    pub async fn reading(&self) -> ClimateReading {
        let (co2_ppm, temp_anomaly) = tokio::join!(self.fetch_co2(), self.fetch_temperature());
        ClimateReading::new(co2_ppm, temp_anomaly)
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nasa(_) => "nasa-giss",
            Self::Fixed(_) => "fixed",
        }
    }
}
