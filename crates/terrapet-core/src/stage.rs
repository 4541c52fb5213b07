//! Growth stage from XP.
//!
//! Thresholds:
//! - 0--99: seed
//! - 100--249: sprout
//! - 250--499: tree
//! - 500+: dragon

use terrapet_types::StageLabel;

/// XP needed to reach [`StageLabel::Sprout`].
pub const SPROUT_XP: i64 = 100;

/// XP needed to reach [`StageLabel::Tree`].
pub const TREE_XP: i64 = 250;

/// XP needed to reach [`StageLabel::Dragon`].
pub const DRAGON_XP: i64 = 500;

/// Classify the pet's growth stage. Negative XP is treated as zero.
pub const fn classify_stage(xp: i64) -> StageLabel {
    if xp >= DRAGON_XP {
        StageLabel::Dragon
    } else if xp >= TREE_XP {
        StageLabel::Tree
    } else if xp >= SPROUT_XP {
        StageLabel::Sprout
    } else {
        StageLabel::Seed
    }
}
