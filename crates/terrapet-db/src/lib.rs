//! Progress ledger for TerraPet.
//!
//! Stores each user's cumulative XP. XP only changes through
//! [`ProgressLedger::award_xp`], an atomic increment, so concurrent awards
//! for the same user are never lost and XP never decreases.
//!
//! ```text
//! ProgressLedger
//!     |-- Postgres(PostgresPool) --> ProgressStore (users table)
//!     +-- Memory(MemoryLedger)   --> BTreeMap behind an RwLock
//! ```
//!
//! # Modules
//!
//! - [`ledger`] -- Enum-dispatched [`ProgressLedger`]
//! - [`postgres`] -- `PostgreSQL` connection pool and migrations
//! - [`progress_store`] -- Queries against the `users` table
//! - [`memory`] -- In-memory ledger for development and tests
//! - [`error`] -- Shared error types

pub mod error;
pub mod ledger;
pub mod memory;
pub mod postgres;
pub mod progress_store;

pub use error::DbError;
pub use ledger::{LEADERBOARD_SIZE, ProgressLedger};
pub use memory::MemoryLedger;
pub use postgres::{PostgresConfig, PostgresPool};
pub use progress_store::{ProgressStore, UserRow};
