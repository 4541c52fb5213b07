//! Shared type definitions for the TerraPet service.
//!
//! Every crate in the workspace speaks in these types: the climate layer
//! produces [`ClimateReading`]s, the engine turns them into
//! [`PetSnapshot`]s, and the ledger stores [`UserProgress`]. Wire-facing
//! types derive `ts-rs` so the static front-end can share them.
//!
//! # Modules
//!
//! - [`ids`] -- Opaque user identifier
//! - [`enums`] -- Mood and growth-stage labels
//! - [`actions`] -- Eco-action reward table
//! - [`structs`] -- Climate readings, snapshots, user records

pub mod actions;
pub mod enums;
pub mod ids;
pub mod structs;

pub use actions::EcoAction;
pub use enums::{MoodLabel, StageLabel};
pub use ids::UserId;
pub use structs::{ClimateReading, LeaderboardEntry, PetSnapshot, UserProgress};
