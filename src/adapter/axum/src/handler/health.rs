/* src/adapter/axum/src/handler/health.rs */

use std::time::{SystemTime, UNIX_EPOCH};

use axum::response::IntoResponse;

pub(super) async fn handle_health() -> impl IntoResponse {
  let timestamp =
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or_default();
  axum::Json(serde_json::json!({ "status": "ok", "timestamp": timestamp }))
}
