//! Pet state derivation for TerraPet.
//!
//! Turns a user's XP and the current climate reading into a deterministic
//! mood and growth stage. The classifiers are pure functions; the
//! [`PetStateEngine`] adds the climate fetch around them.
//!
//! # Modules
//!
//! - [`mood`] -- Linear mood score and thresholds
//! - [`stage`] -- XP growth-stage thresholds
//! - [`engine`] -- Snapshot orchestration over a [`ClimateSource`]
//! - [`config`] -- YAML configuration for the whole service
//!
//! [`ClimateSource`]: terrapet_climate::ClimateSource

pub mod config;
pub mod engine;
pub mod mood;
pub mod stage;

pub use config::{ConfigError, TerrapetConfig};
pub use engine::{PetStateEngine, snapshot_from_reading};
pub use mood::{classify_mood, mood_score};
pub use stage::classify_stage;
