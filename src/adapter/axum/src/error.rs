/* src/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lamina_core::LaminaError;

/// Wrapper making `LaminaError` usable as an Axum response.
pub(crate) struct AxumError(LaminaError);

impl From<LaminaError> for AxumError {
  fn from(err: LaminaError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = match self.0.code() {
      "NOT_FOUND" => StatusCode::NOT_FOUND,
      "VALIDATION" => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = serde_json::json!({
      "ok": false,
      "error": { "code": self.0.code(), "message": self.0.message() },
    });
    (status, axum::Json(body)).into_response()
  }
}
