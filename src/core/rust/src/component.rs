/* src/core/rust/src/component.rs */

use std::sync::Arc;

use serde_json::Value;

use crate::errors::LaminaError;
use crate::page::PageName;

pub type RenderFn = Arc<dyn Fn(&Value) -> Result<String, LaminaError> + Send + Sync>;
pub type HeadFn = Arc<dyn Fn(&Value) -> Vec<String> + Send + Sync>;

/// Opaque reference to a pre-built page component: a factory producing the
/// page body markup for a set of props, plus optional head fragments.
pub struct ComponentDef {
  pub name: PageName,
  pub render: RenderFn,
  /// Head fragments (title/meta) emitted alongside the body. `None` means
  /// the page contributes nothing to the document head.
  pub head: Option<HeadFn>,
}

impl std::fmt::Debug for ComponentDef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ComponentDef")
      .field("name", &self.name)
      .field("render", &"<fn>")
      .field("head", &self.head.as_ref().map(|_| "<fn>"))
      .finish()
  }
}
