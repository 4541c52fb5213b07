//! Climate indicator acquisition for TerraPet.
//!
//! Fetches the latest annual atmospheric CO2 concentration and global
//! temperature anomaly from NASA GISS. Upstream data is treated as
//! unreliable: every fetch either yields a parsed value or degrades to a
//! fixed fallback constant, so a pet can always be rendered.
//!
//! ```text
//! HTTP GET --> strict parser --> value
//!     |              |
//!     +-- any error -+--> warn! + fallback constant
//! ```
//!
//! # Modules
//!
//! - [`client`] -- `reqwest` client for the two NASA datasets
//! - [`parse`] -- Strict parsers for the CO2 text series and temperature table
//! - [`cache`] -- Optional per-metric TTL cache of successful readings
//! - [`source`] -- Enum-dispatched [`ClimateSource`] (live or fixed)
//! - [`error`] -- [`ClimateError`]

use std::time::Duration;

use terrapet_types::ClimateReading;

pub mod cache;
pub mod client;
pub mod error;
pub mod parse;
pub mod source;

pub use client::{ClimateClientConfig, NasaClimateClient};
pub use error::ClimateError;
pub use source::ClimateSource;

/// CO2 concentration used when the upstream series is unavailable.
pub const FALLBACK_CO2_PPM: f64 = 420.0;

/// Temperature anomaly used when the upstream table is unavailable.
pub const FALLBACK_TEMP_ANOMALY: f64 = 1.2;

/// The reading produced when both upstreams are unavailable.
pub const FALLBACK_READING: ClimateReading =
    ClimateReading::new(FALLBACK_CO2_PPM, FALLBACK_TEMP_ANOMALY);

/// NASA GISS annual CO2 series (plain text).
pub const DEFAULT_CO2_URL: &str = "https://data.giss.nasa.gov/global/co2/co2_annual.txt";

/// NASA GISTEMP v4 global land-ocean temperature anomalies (CSV).
pub const DEFAULT_TEMPERATURE_URL: &str =
    "https://data.giss.nasa.gov/gistemp/tabledata_v4/GLB.Ts+dSST.csv";

/// Upper bound on a single upstream request, body included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
