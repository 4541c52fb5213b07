//! REST endpoint handlers for the TerraPet service.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Front-end page (served from the static directory) |
//! | `GET` | `/pet` | Current pet snapshot for the caller |
//! | `POST` | `/feed/{action}` | Record an eco-action and return the new snapshot |
//! | `GET` | `/leaderboard` | Top users by XP |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::Serialize;
use terrapet_db::LEADERBOARD_SIZE;
use terrapet_types::{EcoAction, LeaderboardEntry, PetSnapshot};

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;

/// Body of `GET /pet`.
#[derive(Debug, Serialize)]
pub struct PetResponse {
    /// The pet's current state.
    #[serde(flatten)]
    pub snapshot: PetSnapshot,
    /// The caller's display name.
    pub username: String,
}

/// Body of `POST /feed/{action}`.
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    /// The pet's state after the award.
    #[serde(flatten)]
    pub snapshot: PetSnapshot,
    /// Celebratory message for the action.
    pub message: &'static str,
    /// XP granted by this action.
    pub xp_gain: u32,
}

// ---------------------------------------------------------------------------
// GET /pet
// ---------------------------------------------------------------------------

/// Return the caller's pet, registering the caller on first visit.
pub async fn get_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let identity = Identity::resolve(&headers);
    let progress = state.ledger.get_or_create(&identity.user_id).await?;
    if identity.minted {
        tracing::info!(user_id = %identity.user_id, "new user");
    }

    let snapshot = state.engine.compute_snapshot(progress.xp).await;
    let body = PetResponse {
        snapshot,
        username: progress.username,
    };

    Ok(([identity.set_cookie()?], Json(body)))
}

// ---------------------------------------------------------------------------
// POST /feed/{action}
// ---------------------------------------------------------------------------

/// Record an eco-action for the caller.
///
/// Unknown action names are accepted and earn the default reward. The award
/// itself registers a first-time caller.
pub async fn feed_pet(
    State(state): State<Arc<AppState>>,
    Path(action): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let identity = Identity::resolve(&headers);
    let action = EcoAction::from_name(&action);
    let xp_gain = action.xp_reward();

    let progress = state.ledger.award_xp(&identity.user_id, xp_gain).await?;
    tracing::info!(
        user_id = %identity.user_id,
        action = action.name(),
        recognized = action.is_recognized(),
        xp_gain,
        xp = progress.xp,
        "eco-action recorded"
    );

    let snapshot = state.engine.compute_snapshot(progress.xp).await;
    let body = FeedResponse {
        snapshot,
        message: action.message(),
        xp_gain,
    };

    Ok(([identity.set_cookie()?], Json(body)))
}

// ---------------------------------------------------------------------------
// GET /leaderboard
// ---------------------------------------------------------------------------

/// Top users by XP, highest first.
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let entries = state.ledger.leaderboard(LEADERBOARD_SIZE).await?;
    Ok(Json(entries))
}
