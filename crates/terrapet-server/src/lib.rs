//! HTTP service for the TerraPet climate virtual pet.
//!
//! Each anonymous user (identified by a `user_id` cookie) owns one pet.
//! Reporting eco-actions earns XP; the pet's growth stage follows XP and
//! its mood weighs XP against live global CO2 and temperature data.
//!
//! # Architecture
//!
//! ```text
//! request --> Identity (cookie) --> ProgressLedger (XP)
//!                                        |
//!                                        v
//!                               PetStateEngine (climate + classifiers)
//!                                        |
//!                                        v
//!                                  JSON response + Set-Cookie
//! ```

pub mod error;
pub mod handlers;
pub mod identity;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use identity::Identity;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
