//! Integration tests for the TerraPet API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The climate source is fixed and the ledger is
//! in memory, so no network or database is needed.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use serde_json::Value;
use terrapet_climate::ClimateSource;
use terrapet_core::PetStateEngine;
use terrapet_db::ProgressLedger;
use terrapet_server::{AppState, build_router};
use terrapet_types::ClimateReading;
use tower::ServiceExt;

fn static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../static"))
}

fn make_router(source: ClimateSource) -> Router {
    let state = AppState::new(
        PetStateEngine::new(source),
        ProgressLedger::in_memory(),
        static_dir(),
    );
    build_router(Arc::new(state))
}

fn fallback_router() -> Router {
    make_router(ClimateSource::fallback())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

fn get_with_cookie(uri: &str, user_id: &str) -> Request<Body> {
    Request::get(uri)
        .header(COOKIE, format!("user_id={user_id}"))
        .body(Body::empty())
        .unwrap()
}

fn feed(action: &str, user_id: &str) -> Request<Body> {
    Request::post(format!("/feed/{action}"))
        .header(COOKIE, format!("user_id={user_id}"))
        .body(Body::empty())
        .unwrap()
}

// =========================================================================
// Front-end
// =========================================================================

#[tokio::test]
async fn index_serves_html() {
    let response = fallback_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

// =========================================================================
// GET /pet
// =========================================================================

#[tokio::test]
async fn pet_without_cookie_mints_identity() {
    let response = fallback_router()
        .oneshot(Request::get("/pet").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("user_id="));
    assert!(cookie.contains("Max-Age=31536000"));
    assert!(cookie.contains("Path=/"));

    let minted = cookie
        .trim_start_matches("user_id=")
        .split(';')
        .next()
        .unwrap()
        .to_owned();
    assert!(uuid::Uuid::parse_str(&minted).is_ok());

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp"], 0);
    assert_eq!(json["mood"], "sad");
    assert_eq!(json["form"], "seed");
    assert_eq!(json["co2"], 420.0);
    assert_eq!(json["temp"], 1.2);
    assert_eq!(
        json["username"],
        format!("EcoWarrior_{}", &minted[..6]).as_str()
    );
}

#[tokio::test]
async fn pet_with_cookie_reuses_identity() {
    let response = fallback_router()
        .oneshot(get_with_cookie("/pet", "abcdef-1234"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).starts_with("user_id=abcdef-1234;"));

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["username"], "EcoWarrior_abcdef");
    assert_eq!(json["xp"], 0);
}

#[tokio::test]
async fn pet_rounds_climate_values() {
    let router = make_router(ClimateSource::Fixed(ClimateReading::new(423.456, 1.234)));

    let response = router
        .oneshot(get_with_cookie("/pet", "rounding"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["co2"], 423.46);
    assert_eq!(json["temp"], 1.23);
}

// =========================================================================
// POST /feed/{action}
// =========================================================================

#[tokio::test]
async fn feed_known_action_awards_its_reward() {
    let response = fallback_router()
        .oneshot(feed("solar", "sunny"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).starts_with("user_id=sunny;"));

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp_gain"], 35);
    assert_eq!(json["xp"], 35);
    assert_eq!(json["message"], "☀️ Solar power brightens TerraPet's day!");
    assert_eq!(json["form"], "seed");
    assert!(json.get("username").is_none());
}

#[tokio::test]
async fn feed_unknown_action_awards_default() {
    let response = fallback_router()
        .oneshot(feed("walk", "walker"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp_gain"], 10);
    assert_eq!(json["xp"], 10);
    assert_eq!(json["message"], "✨ Great eco-action!");
}

#[tokio::test]
async fn feed_action_names_are_case_sensitive() {
    let response = fallback_router()
        .oneshot(feed("Bike", "caps"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp_gain"], 10);
}

#[tokio::test]
async fn feed_without_cookie_mints_identity() {
    let response = fallback_router()
        .oneshot(Request::post("/feed/bike").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).starts_with("user_id="));
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp"], 25);
}

#[tokio::test]
async fn first_feed_registers_the_user() {
    let router = fallback_router();

    let response = router.clone().oneshot(feed("bike", "newcomer")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(get_with_cookie("/pet", "newcomer"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp"], 25);
    assert_eq!(json["username"], "EcoWarrior_newcom");

    let response = router
        .oneshot(Request::get("/leaderboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([{ "username": "EcoWarrior_newcom", "xp": 25 }]));
}

#[tokio::test]
async fn xp_accumulates_and_pet_grows() {
    let router = make_router(ClimateSource::Fixed(ClimateReading::new(400.0, 0.0)));

    // 4 x 30 = 120 XP: sprout.
    for _ in 0..4 {
        let response = router.clone().oneshot(feed("plant", "gardener")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(get_with_cookie("/pet", "gardener"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp"], 120);
    assert_eq!(json["form"], "sprout");
    assert_eq!(json["mood"], "worried");

    // Other users are unaffected.
    let response = router
        .oneshot(get_with_cookie("/pet", "bystander"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["xp"], 0);
}

#[tokio::test]
async fn feed_requires_post() {
    let response = fallback_router()
        .oneshot(get_with_cookie("/feed/bike", "getter"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =========================================================================
// GET /leaderboard
// =========================================================================

#[tokio::test]
async fn leaderboard_starts_empty() {
    let response = fallback_router()
        .oneshot(Request::get("/leaderboard").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn leaderboard_lists_top_ten_by_xp() {
    let router = fallback_router();

    // user-00 gets 1 action, user-11 gets 12.
    for n in 0..12_usize {
        let user = format!("user-{n:02}");
        for _ in 0..=n {
            let response = router.clone().oneshot(feed("bike", &user)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    let response = router
        .oneshot(Request::get("/leaderboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["username"], "EcoWarrior_user-1");
    assert_eq!(entries[0]["xp"], 300);
    assert_eq!(entries[9]["xp"], 75);
    assert!(
        entries
            .windows(2)
            .all(|w| w[0]["xp"].as_i64() >= w[1]["xp"].as_i64())
    );
}
