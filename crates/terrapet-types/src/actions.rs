//! Eco-action reward table.
//!
//! A client may submit any action name. Recognized names earn a bespoke
//! XP reward and message; everything else is [`EcoAction::Other`] and
//! earns the default reward. Parsing never fails.

use core::convert::Infallible;
use core::str::FromStr;

/// XP awarded for an unrecognized action.
pub const DEFAULT_XP_REWARD: u32 = 10;

/// Message returned for an unrecognized action.
pub const DEFAULT_MESSAGE: &str = "✨ Great eco-action!";

/// An eco-friendly action a user reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EcoAction {
    /// Biked instead of driving.
    Bike,
    /// Recycled waste.
    Recycle,
    /// Planted a tree.
    Plant,
    /// Shared a ride.
    Carpool,
    /// Used solar power.
    Solar,
    /// Composted organic waste.
    Compost,
    /// Any other action, kept by name.
    Other(String),
}

impl EcoAction {
    /// Resolve an action name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bike" => Self::Bike,
            "recycle" => Self::Recycle,
            "plant" => Self::Plant,
            "carpool" => Self::Carpool,
            "solar" => Self::Solar,
            "compost" => Self::Compost,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The action's name as submitted.
    pub fn name(&self) -> &str {
        match self {
            Self::Bike => "bike",
            Self::Recycle => "recycle",
            Self::Plant => "plant",
            Self::Carpool => "carpool",
            Self::Solar => "solar",
            Self::Compost => "compost",
            Self::Other(name) => name,
        }
    }

    /// XP earned by performing this action.
    pub const fn xp_reward(&self) -> u32 {
        match self {
            Self::Bike => 25,
            Self::Recycle => 15,
            Self::Plant => 30,
            Self::Carpool => 20,
            Self::Solar => 35,
            Self::Compost => 18,
            Self::Other(_) => DEFAULT_XP_REWARD,
        }
    }

    /// Celebratory message shown after the action.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Bike => "💚 You biked instead of drove — TerraPet smiles!",
            Self::Recycle => "♻️ Recycling makes the Earth cleaner!",
            Self::Plant => "🌱 A new tree — TerraPet feels the oxygen!",
            Self::Carpool => "🚗 Sharing rides saves energy!",
            Self::Solar => "☀️ Solar power brightens TerraPet's day!",
            Self::Compost => "🌿 Composting feeds the soil!",
            Self::Other(_) => DEFAULT_MESSAGE,
        }
    }

    /// Whether this action has a bespoke reward.
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for EcoAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl core::fmt::Display for EcoAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
