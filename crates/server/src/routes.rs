//! API route definitions and handlers.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::SharedState;
use crate::stream;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/video_feed", get(stream::video_feed))
        .route("/start_dance/:dance_id", post(start_dance))
        .route("/stop_dance", post(stop_dance))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Serialize)]
struct StartedResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct StoppedResponse {
    status: &'static str,
    score: u32,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn start_dance(
    State(state): State<SharedState>,
    Path(dance_id): Path<String>,
) -> Json<StartedResponse> {
    state.session.lock().start(&dance_id);
    Json(StartedResponse { status: "started" })
}

async fn stop_dance(State(state): State<SharedState>) -> Json<StoppedResponse> {
    let score = state.session.lock().stop();
    Json(StoppedResponse {
        status: "stopped",
        score,
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
