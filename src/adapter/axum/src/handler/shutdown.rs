/* src/adapter/axum/src/handler/shutdown.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;

use super::AppState;

pub(super) async fn handle_shutdown(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let status = match state.shutdown {
    Some(ref notify) => {
      notify.notify_one();
      "shutting down"
    }
    // Embedded router: the host owns the process lifecycle
    None => "ignored",
  };
  tracing::info!(status, "shutdown requested");
  axum::Json(serde_json::json!({ "status": status }))
}
