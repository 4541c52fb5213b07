//! Mood classification from XP and climate penalties.
//!
//! A linear score: XP raises a baseline by one point per 20 XP, while CO2
//! above 400 ppm and a positive temperature anomaly subtract penalties.
//!
//! ```text
//! score = floor(xp / 20) - (max(0, (co2 - 400) / 5) + max(0, temp * 15))
//! ```
//!
//! | Score | Mood |
//! |-------|------|
//! | >= 15 | joyful |
//! | >= 8 | calm |
//! | >= 2 | worried |
//! | otherwise | sad |

use terrapet_types::MoodLabel;

/// XP per point of base happiness.
pub const XP_PER_BASE_POINT: i64 = 20;

/// CO2 concentration above which the penalty starts.
pub const CO2_BASELINE_PPM: f64 = 400.0;

/// Parts per million of excess CO2 per penalty point.
pub const CO2_PPM_PER_PENALTY_POINT: f64 = 5.0;

/// Penalty points per degree of positive temperature anomaly.
pub const TEMP_PENALTY_PER_DEGREE: f64 = 15.0;

/// Minimum score for [`MoodLabel::Joyful`].
pub const JOYFUL_SCORE: f64 = 15.0;

/// Minimum score for [`MoodLabel::Calm`].
pub const CALM_SCORE: f64 = 8.0;

/// Minimum score for [`MoodLabel::Worried`].
pub const WORRIED_SCORE: f64 = 2.0;

/// Base happiness contributed by XP. Negative XP counts as zero.
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
fn base_happiness(xp: i64) -> f64 {
    (xp.max(0) / XP_PER_BASE_POINT) as f64
}

/// Penalty for CO2 above the baseline. Never negative; NaN yields zero.
fn co2_penalty(co2_ppm: f64) -> f64 {
    ((co2_ppm - CO2_BASELINE_PPM) / CO2_PPM_PER_PENALTY_POINT).max(0.0)
}

/// Penalty for a positive temperature anomaly. A negative anomaly is not a bonus.
fn temp_penalty(temp_anomaly: f64) -> f64 {
    (temp_anomaly * TEMP_PENALTY_PER_DEGREE).max(0.0)
}

/// The raw mood score before thresholding.
pub fn mood_score(xp: i64, co2_ppm: f64, temp_anomaly: f64) -> f64 {
    base_happiness(xp) - (co2_penalty(co2_ppm) + temp_penalty(temp_anomaly))
}

/// Classify the pet's mood.
///
/// Thresholds are checked from highest to lowest, first match wins.
pub fn classify_mood(xp: i64, co2_ppm: f64, temp_anomaly: f64) -> MoodLabel {
    let score = mood_score(xp, co2_ppm, temp_anomaly);

    if score >= JOYFUL_SCORE {
        MoodLabel::Joyful
    } else if score >= CALM_SCORE {
        MoodLabel::Calm
    } else if score >= WORRIED_SCORE {
        MoodLabel::Worried
    } else {
        MoodLabel::Sad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn no_xp_clean_air_is_sad() {
        assert_close(mood_score(0, 400.0, 0.0), 0.0);
        assert_eq!(classify_mood(0, 400.0, 0.0), MoodLabel::Sad);
    }

    #[test]
    fn three_hundred_xp_clean_air_is_joyful() {
        assert_close(mood_score(300, 400.0, 0.0), 15.0);
        assert_eq!(classify_mood(300, 400.0, 0.0), MoodLabel::Joyful);
    }

    #[test]
    fn co2_penalty_example() {
        assert_close(mood_score(300, 450.0, 0.0), 5.0);
        assert_eq!(classify_mood(300, 450.0, 0.0), MoodLabel::Worried);
    }

    #[test]
    fn temperature_penalty_example() {
        assert_close(mood_score(300, 400.0, 0.5), 7.5);
        assert_eq!(classify_mood(300, 400.0, 0.5), MoodLabel::Worried);
    }

    #[test]
    fn base_uses_integer_division() {
        assert_close(mood_score(19, 400.0, 0.0), 0.0);
        assert_close(mood_score(20, 400.0, 0.0), 1.0);
        assert_close(mood_score(39, 400.0, 0.0), 1.0);
        assert_eq!(classify_mood(299, 400.0, 0.0), MoodLabel::Calm);
    }

    #[test]
    fn low_co2_and_cold_anomaly_are_not_bonuses() {
        assert_close(mood_score(100, 350.0, -0.8), 5.0);
    }

    #[test]
    fn thresholds_are_inclusive() {
        // 160 XP -> base 8
        assert_eq!(classify_mood(160, 400.0, 0.0), MoodLabel::Calm);
        // 40 XP -> base 2
        assert_eq!(classify_mood(40, 400.0, 0.0), MoodLabel::Worried);
        assert_eq!(classify_mood(39, 400.0, 0.0), MoodLabel::Sad);
    }

    #[test]
    fn fallback_climate_penalty() {
        // (420 - 400) / 5 + 1.2 * 15 = 4 + 18 = 22
        assert_close(mood_score(0, 420.0, 1.2), -22.0);
        assert_eq!(classify_mood(740, 420.0, 1.2), MoodLabel::Joyful);
        assert_eq!(classify_mood(720, 420.0, 1.2), MoodLabel::Calm);
        assert_eq!(classify_mood(479, 420.0, 1.2), MoodLabel::Sad);
    }

    #[test]
    fn negative_xp_is_clamped() {
        assert_close(mood_score(-500, 400.0, 0.0), 0.0);
        assert_eq!(classify_mood(-500, 400.0, 0.0), MoodLabel::Sad);
    }

    #[test]
    fn nan_penalties_count_as_zero() {
        assert_eq!(classify_mood(1_000, f64::NAN, 0.0), MoodLabel::Joyful);
        assert_eq!(classify_mood(0, 400.0, f64::NAN), MoodLabel::Sad);
    }

    #[test]
    fn non_decreasing_in_xp() {
        for &(co2, temp) in &[(400.0, 0.0), (420.0, 1.2), (480.0, 2.5)] {
            let mut previous = classify_mood(0, co2, temp);
            for xp in (0..=2_000).step_by(7) {
                let current = classify_mood(xp, co2, temp);
                assert!(current >= previous, "mood dropped at xp {xp}");
                previous = current;
            }
        }
    }

    #[test]
    fn non_increasing_in_co2() {
        for xp in [0, 150, 300, 600] {
            let mut previous = classify_mood(xp, 300.0, 0.3);
            for step in 0..200 {
                let co2 = 300.0 + f64::from(step);
                let current = classify_mood(xp, co2, 0.3);
                assert!(current <= previous, "mood rose at co2 {co2}");
                previous = current;
            }
        }
    }

    #[test]
    fn non_increasing_in_temperature() {
        for xp in [0, 150, 300, 600] {
            let mut previous = classify_mood(xp, 410.0, -1.0);
            for step in 0..60 {
                let temp = -1.0 + f64::from(step) * 0.05;
                let current = classify_mood(xp, 410.0, temp);
                assert!(current <= previous, "mood rose at temp {temp}");
                previous = current;
            }
        }
    }
}
