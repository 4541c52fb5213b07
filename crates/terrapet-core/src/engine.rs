//! Pet state engine.
//!
//! Combines a fresh [`ClimateReading`] with the mood and stage classifiers
//! to build a [`PetSnapshot`]. The engine holds no mutable state of its own
//! and cannot fail: the climate source has already absorbed upstream
//! failures into fallback values.

use terrapet_climate::ClimateSource;
use terrapet_types::{ClimateReading, PetSnapshot};
use tracing::debug;

use crate::mood::classify_mood;
use crate::stage::classify_stage;

/// Builds pet snapshots from XP and live climate data.
#[derive(Debug)]
pub struct PetStateEngine {
    source: ClimateSource,
}

impl PetStateEngine {
    /// Create an engine reading from the given climate source.
    pub const fn new(source: ClimateSource) -> Self {
        Self { source }
    }

    /// Compute the pet's state for `xp` using freshly fetched climate data.
    ///
    /// CO2 and temperature are fetched concurrently and independently.
    pub async fn compute_snapshot(&self, xp: i64) -> PetSnapshot {
        let reading = self.source.reading().await;
        let snapshot = snapshot_from_reading(xp, reading);
        debug!(
            xp = snapshot.xp,
            mood = %snapshot.mood,
            stage = %snapshot.stage,
            co2_ppm = snapshot.co2_ppm,
            temp_anomaly = snapshot.temp_anomaly,
            source = self.source.name(),
            "pet snapshot computed"
        );
        snapshot
    }
}

/// Assemble a snapshot from XP and an already-obtained climate reading.
///
/// Negative XP is clamped to zero. Mood is classified on the unrounded
/// reading; the reported CO2 and temperature are rounded to two decimals.
pub fn snapshot_from_reading(xp: i64, reading: ClimateReading) -> PetSnapshot {
    let xp = xp.max(0);
    PetSnapshot {
        xp,
        mood: classify_mood(xp, reading.co2_ppm, reading.temp_anomaly),
        stage: classify_stage(xp),
        co2_ppm: round_hundredths(reading.co2_ppm),
        temp_anomaly: round_hundredths(reading.temp_anomaly),
    }
}

/// Round to two decimal places.
///
/// Goes through the formatter, which rounds the exact binary value. Scaling
/// by 100 first can land on a tie that the input never was.
fn round_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
