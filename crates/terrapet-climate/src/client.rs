//! HTTP client for the NASA GISS climate datasets.
//!
//! Each `fetch_*` call issues one GET with a bounded timeout, parses the
//! body strictly, and on any failure logs a warning and returns the
//! metric's fallback constant. There are no retries.

use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::error::ClimateError;
use crate::parse::{CO2_HEADER_LINES, parse_co2_annual, parse_temperature_table};
use crate::{
    DEFAULT_CO2_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TEMPERATURE_URL, FALLBACK_CO2_PPM,
    FALLBACK_TEMP_ANOMALY,
};

/// Settings for [`NasaClimateClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateClientConfig {
    /// URL of the plain-text annual CO2 series.
    pub co2_url: String,
    /// URL of the annual-mean temperature anomaly CSV.
    pub temperature_url: String,
    /// Deadline for one request, including reading the body.
    pub request_timeout: Duration,
    /// Non-data lines at the top of the CO2 series.
    pub co2_header_lines: usize,
    /// How long a successful reading is reused. Zero disables caching.
    pub cache_ttl: Duration,
}

impl Default for ClimateClientConfig {
    fn default() -> Self {
        Self {
            co2_url: DEFAULT_CO2_URL.to_owned(),
            temperature_url: DEFAULT_TEMPERATURE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            co2_header_lines: CO2_HEADER_LINES,
            cache_ttl: Duration::ZERO,
        }
    }
}

/// Live climate source backed by NASA GISS.
#[derive(Debug)]
pub struct NasaClimateClient {
    client: reqwest::Client,
    co2_url: String,
    temperature_url: String,
    co2_header_lines: usize,
    co2_cache: TtlCache,
    temperature_cache: TtlCache,
}

impl NasaClimateClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Client`] if the underlying HTTP client cannot
    /// be constructed (for example, the TLS backend fails to initialize).
    pub fn new(config: &ClimateClientConfig) -> Result<Self, ClimateError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("terrapet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClimateError::Client(e.to_string()))?;

        Ok(Self {
            client,
            co2_url: config.co2_url.clone(),
            temperature_url: config.temperature_url.clone(),
            co2_header_lines: config.co2_header_lines,
            co2_cache: TtlCache::new(config.cache_ttl),
            temperature_cache: TtlCache::new(config.cache_ttl),
        })
    }

    /// Latest annual CO2 concentration in ppm, or [`FALLBACK_CO2_PPM`].
    pub async fn fetch_co2(&self) -> f64 {
        if let Some(ppm) = self.co2_cache.get().await {
            debug!(metric = "co2", value = ppm, "serving cached climate reading");
            return ppm;
        }

        match self.try_fetch_co2().await {
            Ok(ppm) => {
                debug!(metric = "co2", value = ppm, "climate reading fetched");
                self.co2_cache.store(ppm).await;
                ppm
            }
            Err(e) => {
                warn!(
                    metric = "co2",
                    error = %e,
                    fallback = FALLBACK_CO2_PPM,
                    "climate fetch failed, using fallback"
                );
                FALLBACK_CO2_PPM
            }
        }
    }

    /// Latest annual-mean temperature anomaly, or [`FALLBACK_TEMP_ANOMALY`].
    pub async fn fetch_temperature(&self) -> f64 {
        if let Some(anomaly) = self.temperature_cache.get().await {
            debug!(metric = "temperature", value = anomaly, "serving cached climate reading");
            return anomaly;
        }

        match self.try_fetch_temperature().await {
            Ok(anomaly) => {
                debug!(metric = "temperature", value = anomaly, "climate reading fetched");
                self.temperature_cache.store(anomaly).await;
                anomaly
            }
            Err(e) => {
                warn!(
                    metric = "temperature",
                    error = %e,
                    fallback = FALLBACK_TEMP_ANOMALY,
                    "climate fetch failed, using fallback"
                );
                FALLBACK_TEMP_ANOMALY
            }
        }
    }

    /// Fetch and parse the CO2 series without applying the fallback.
    ///
    /// # Errors
    ///
    /// Returns the [`ClimateError`] describing why upstream data is
    /// unavailable.
    pub async fn try_fetch_co2(&self) -> Result<f64, ClimateError> {
        let body = self.get_text(&self.co2_url).await?;
        parse_co2_annual(&body, self.co2_header_lines)
    }

    /// Fetch and parse the temperature table without applying the fallback.
    ///
    /// # Errors
    ///
    /// Returns the [`ClimateError`] describing why upstream data is
    /// unavailable.
    pub async fn try_fetch_temperature(&self) -> Result<f64, ClimateError> {
        let body = self.get_text(&self.temperature_url).await?;
        parse_temperature_table(&body)
    }

    /// GET a URL and return its body, rejecting non-success statuses.
    async fn get_text(&self, url: &str) -> Result<String, ClimateError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClimateError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
