/* src/adapter/axum/src/handler/render.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use lamina_core::{LaminaError, PageDescriptor};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_render(
  State(state): State<Arc<AppState>>,
  body: axum::body::Bytes,
) -> Result<Response, AxumError> {
  let page: PageDescriptor = serde_json::from_slice(&body)
    .map_err(|e| LaminaError::validation(format!("Parse page descriptor: {e}")))?;

  tracing::debug!(component = %page.component, url = %page.url, "render");
  let result = lamina_engine::render_page(&state.registry, &state.shell, &page)?;
  Ok(axum::Json(result).into_response())
}
