//! Classification labels exposed by the pet engine.
//!
//! Variants are declared from lowest to highest so the derived `Ord`
//! follows the underlying score (mood) or XP threshold (stage).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// The pet's emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MoodLabel {
    /// Score below 2.
    Sad,
    /// Score in `[2, 8)`.
    Worried,
    /// Score in `[8, 15)`.
    Calm,
    /// Score of 15 or more.
    Joyful,
}

impl MoodLabel {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Worried => "worried",
            Self::Calm => "calm",
            Self::Joyful => "joyful",
        }
    }
}

impl core::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Growth stage
// ---------------------------------------------------------------------------

/// The pet's growth tier, driven by XP alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum StageLabel {
    /// Below 100 XP.
    Seed,
    /// 100 to 249 XP.
    Sprout,
    /// 250 to 499 XP.
    Tree,
    /// 500 XP and above.
    Dragon,
}

impl StageLabel {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Sprout => "sprout",
            Self::Tree => "tree",
            Self::Dragon => "dragon",
        }
    }
}

impl core::fmt::Display for StageLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_lowercase() {
        let mood = serde_json::to_string(&MoodLabel::Joyful).unwrap_or_default();
        assert_eq!(mood, "\"joyful\"");
        let stage = serde_json::to_string(&StageLabel::Dragon).unwrap_or_default();
        assert_eq!(stage, "\"dragon\"");
    }

    #[test]
    fn ordering_follows_thresholds() {
        assert!(MoodLabel::Sad < MoodLabel::Worried);
        assert!(MoodLabel::Calm < MoodLabel::Joyful);
        assert!(StageLabel::Seed < StageLabel::Sprout);
        assert!(StageLabel::Tree < StageLabel::Dragon);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(MoodLabel::Worried.to_string(), "worried");
        assert_eq!(StageLabel::Sprout.to_string(), "sprout");
    }
}
