//! Queries against the `users` table.
//!
//! Every write is a single statement, so XP increments are atomic at the
//! database level: two concurrent awards both land.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use terrapet_types::{LeaderboardEntry, UserId, UserProgress};

use crate::error::DbError;

/// Columns selected for a full [`UserRow`].
const USER_COLUMNS: &str = "user_id, username, xp, created_at, last_action_at";

/// Operations on the `users` table.
pub struct ProgressStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ProgressStore<'a> {
    /// Create a store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user's record, inserting a fresh one (0 XP) if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if either statement fails.
    pub async fn get_or_create(&self, user_id: &UserId) -> Result<UserProgress, DbError> {
        sqlx::query(
            r"INSERT INTO users (user_id, username, xp)
              VALUES ($1, $2, 0)
              ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id.as_str())
        .bind(user_id.default_username())
        .execute(self.pool)
        .await?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Add `delta` XP to a user and stamp the action time.
    ///
    /// Creates the user if it does not exist yet. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the upsert fails.
    pub async fn award_xp(&self, user_id: &UserId, delta: u32) -> Result<UserProgress, DbError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r"INSERT INTO users (user_id, username, xp, last_action_at)
              VALUES ($1, $2, $3, now())
              ON CONFLICT (user_id)
              DO UPDATE SET xp = users.xp + EXCLUDED.xp, last_action_at = now()
              RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id.as_str())
        .bind(user_id.default_username())
        .bind(i64::from(delta))
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(user_id = %user_id, delta, xp = row.xp, "Awarded XP");
        Ok(row.into())
    }

    /// Top users by XP, highest first. Ties go to the earlier account.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r"SELECT username, xp
              FROM users
              ORDER BY xp DESC, created_at ASC
              LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// A row from the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    /// Opaque user identifier.
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Cumulative XP.
    pub xp: i64,
    /// First-seen timestamp.
    pub created_at: DateTime<Utc>,
    /// Last XP award timestamp.
    pub last_action_at: DateTime<Utc>,
}

impl From<UserRow> for UserProgress {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: UserId::from(row.user_id),
            username: row.username,
            xp: row.xp,
            created_at: row.created_at,
            last_action_at: row.last_action_at,
        }
    }
}

/// Projection used by the leaderboard query.
#[derive(Debug, Clone, sqlx::FromRow)]
struct LeaderboardRow {
    username: String,
    xp: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            username: row.username,
            xp: row.xp,
        }
    }
}
