/* src/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use lamina_core::{LaminaError, SsrApp};
use tokio::sync::Notify;

/// Re-export lamina-core for convenience
pub use lamina_core;

/// Extension trait that turns an `SsrApp` into an SSR sidecar: an Axum
/// router speaking the render/health/shutdown protocol expected by the
/// hosting process.
pub trait IntoSsrRouter {
  fn into_ssr_router(self) -> Result<axum::Router, LaminaError>;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoSsrRouter for SsrApp {
  fn into_ssr_router(self) -> Result<axum::Router, LaminaError> {
    let parts = self.into_parts()?;
    Ok(handler::build_router(parts, None))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parts = self.into_parts()?;
    let shutdown = Arc::new(Notify::new());
    let router = handler::build_router(parts, Some(shutdown.clone()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("SSR sidecar listening on http://{local_addr}");
    axum::serve(listener, router)
      .with_graceful_shutdown(async move { shutdown.notified().await })
      .await?;
    Ok(())
  }
}
