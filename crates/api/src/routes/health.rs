//! `GET /health`. Answers without calling the weather API or opening the
//! database connection, so it stays green while either is down.

use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
