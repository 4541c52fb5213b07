//! Backend-agnostic progress ledger.
//!
//! Uses enum dispatch rather than a trait object so the async methods need
//! no boxing.

use terrapet_types::{LeaderboardEntry, UserId, UserProgress};

use crate::error::DbError;
use crate::memory::MemoryLedger;
use crate::postgres::PostgresPool;

/// Number of entries returned by the public leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Where user progress is stored.
#[derive(Debug)]
pub enum ProgressLedger {
    /// Durable storage in `PostgreSQL`.
    Postgres(PostgresPool),
    /// Process-local storage, lost on restart.
    Memory(MemoryLedger),
}

impl ProgressLedger {
    /// An empty in-memory ledger.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryLedger::new())
    }

    /// Fetch a user's record, creating it with 0 XP on first sight.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backing store fails.
    pub async fn get_or_create(&self, user_id: &UserId) -> Result<UserProgress, DbError> {
        match self {
            Self::Postgres(pool) => pool.progress().get_or_create(user_id).await,
            Self::Memory(memory) => Ok(memory.get_or_create(user_id).await),
        }
    }

    /// Atomically add `delta` XP to a user and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backing store fails.
    pub async fn award_xp(&self, user_id: &UserId, delta: u32) -> Result<UserProgress, DbError> {
        match self {
            Self::Postgres(pool) => pool.progress().award_xp(user_id, delta).await,
            Self::Memory(memory) => Ok(memory.award_xp(user_id, delta).await),
        }
    }

    /// Top `limit` users by XP, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backing store fails.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        match self {
            Self::Postgres(pool) => pool.progress().leaderboard(limit).await,
            Self::Memory(memory) => Ok(memory.leaderboard(limit).await),
        }
    }

    /// Short backend name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}
