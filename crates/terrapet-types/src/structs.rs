//! Value records shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{MoodLabel, StageLabel};
use crate::ids::UserId;

// ---------------------------------------------------------------------------
// Climate
// ---------------------------------------------------------------------------

/// A pair of global climate indicators used as mood penalties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClimateReading {
    /// Atmospheric CO2 concentration in parts per million.
    pub co2_ppm: f64,
    /// Global mean temperature anomaly in degrees Celsius.
    pub temp_anomaly: f64,
}

impl ClimateReading {
    /// Build a reading from its two components.
    pub const fn new(co2_ppm: f64, temp_anomaly: f64) -> Self {
        Self {
            co2_ppm,
            temp_anomaly,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine output
// ---------------------------------------------------------------------------

/// The pet's full state for one XP value and one climate reading.
///
/// Serialized with the short field names the front-end expects:
/// `xp`, `mood`, `form`, `co2`, `temp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetSnapshot {
    /// The XP the snapshot was computed for.
    pub xp: i64,
    /// Derived mood.
    pub mood: MoodLabel,
    /// Derived growth stage.
    #[serde(rename = "form")]
    pub stage: StageLabel,
    /// CO2 ppm rounded to two decimals.
    #[serde(rename = "co2")]
    pub co2_ppm: f64,
    /// Temperature anomaly rounded to two decimals.
    #[serde(rename = "temp")]
    pub temp_anomaly: f64,
}

// ---------------------------------------------------------------------------
// Persistence records
// ---------------------------------------------------------------------------

/// A user's stored progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Opaque identifier from the `user_id` cookie.
    pub user_id: UserId,
    /// Display name.
    pub username: String,
    /// Cumulative XP. Never negative, never decreases.
    pub xp: i64,
    /// When the user was first seen.
    pub created_at: DateTime<Utc>,
    /// When the user last earned XP (creation time until then).
    pub last_action_at: DateTime<Utc>,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardEntry {
    /// Display name.
    pub username: String,
    /// Cumulative XP.
    pub xp: i64,
}
