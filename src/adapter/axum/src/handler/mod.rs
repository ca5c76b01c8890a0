/* src/adapter/axum/src/handler/mod.rs */

mod health;
mod render;
mod shutdown;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use lamina_core::{AppShell, PageRegistry, SsrParts};
use tokio::sync::Notify;

pub(crate) struct AppState {
  pub registry: PageRegistry,
  pub shell: AppShell,
  /// Present only when served standalone; `None` for embedded routers.
  pub shutdown: Option<Arc<Notify>>,
}

pub(crate) fn build_router(parts: SsrParts, shutdown: Option<Arc<Notify>>) -> Router {
  let state = Arc::new(AppState { registry: parts.registry, shell: parts.shell, shutdown });
  Router::new()
    .route("/render", post(render::handle_render))
    .route("/health", get(health::handle_health))
    .route("/shutdown", post(shutdown::handle_shutdown))
    .with_state(state)
}
