use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::SharedState;
use crate::error::ApiError;

/// Liveness probe. Answers as long as the process is up.
pub async fn livez() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe. Refuses once shutdown has begun or the board lock is
/// poisoned, so load balancers stop routing new traffic here.
pub async fn readyz(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    let board = state
        .board
        .read()
        .map_err(|_| ApiError::ServiceUnavailable("board lock poisoned".into()))?;

    Ok(Json(json!({
        "status": "ok",
        "postings": board.len(),
        "application": env!("CARGO_PKG_NAME"),
    })))
}
