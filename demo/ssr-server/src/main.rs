/* demo/ssr-server/src/main.rs */

mod pages;

use std::env;

use lamina_axum::IntoSsrRouter;
use lamina_core::SsrApp;

use pages::{home_page, user_profile_page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let port = env::var("PORT").unwrap_or_else(|_| "13714".to_string());
  let addr = format!("0.0.0.0:{port}");

  SsrApp::new().component(home_page()).component(user_profile_page()).serve(&addr).await
}
