//! Axum router construction for the TerraPet service.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- `index.html` from the static directory
/// - `GET /static/*` -- other front-end assets
/// - `GET /pet` -- the caller's pet snapshot
/// - `POST /feed/{action}` -- record an eco-action
/// - `GET /leaderboard` -- top users by XP
///
/// CORS allows any origin so the front-end can be hosted separately.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // Front-end
        .route_service("/", index)
        .nest_service("/static", assets)
        // REST API
        .route("/pet", get(handlers::get_pet))
        .route("/feed/{action}", post(handlers::feed_pet))
        .route("/leaderboard", get(handlers::leaderboard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
