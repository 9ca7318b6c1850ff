//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health — liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    marquee_db::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}
