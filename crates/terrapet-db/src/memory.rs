//! In-memory progress ledger.
//!
//! Used when no database URL is configured and in tests. Progress is lost
//! when the process exits. Each operation holds the write lock for its whole
//! read-modify-write, so increments are atomic.

use std::collections::BTreeMap;

use chrono::Utc;
use terrapet_types::{LeaderboardEntry, UserId, UserProgress};
use tokio::sync::RwLock;

/// User records kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    users: RwLock<BTreeMap<UserId, UserProgress>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a user's record, inserting a fresh one (0 XP) if absent.
    pub async fn get_or_create(&self, user_id: &UserId) -> UserProgress {
        let mut users = self.users.write().await;
        users
            .entry(user_id.clone())
            .or_insert_with(|| new_user(user_id))
            .clone()
    }

    /// Add `delta` XP to a user, creating the user if needed.
    pub async fn award_xp(&self, user_id: &UserId, delta: u32) -> UserProgress {
        let mut users = self.users.write().await;
        let user = users
            .entry(user_id.clone())
            .or_insert_with(|| new_user(user_id));
        user.xp = user.xp.saturating_add(i64::from(delta));
        user.last_action_at = Utc::now();
        user.clone()
    }

    /// Top users by XP, highest first. Ties go to the earlier account.
    pub async fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let users = self.users.read().await;
        let mut ranked: Vec<&UserProgress> = users.values().collect();
        ranked.sort_by(|a, b| {
            b.xp.cmp(&a.xp)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        ranked
            .into_iter()
            .take(limit)
            .map(|user| LeaderboardEntry {
                username: user.username.clone(),
                xp: user.xp,
            })
            .collect()
    }

    /// Number of known users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user has been seen yet.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn new_user(user_id: &UserId) -> UserProgress {
    let now = Utc::now();
    UserProgress {
        user_id: user_id.clone(),
        username: user_id.default_username(),
        xp: 0,
        created_at: now,
        last_action_at: now,
    }
}
