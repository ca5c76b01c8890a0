/* src/client/rust/src/boot.rs */

//! Client bootstrap: runs once at page load on the UI thread. Parses the
//! page state the server embedded in the shell root, resolves the component,
//! and hands both to the caller's hydration hook.

use std::sync::Arc;

use lamina_core::{ComponentDef, LaminaError, PageDescriptor, PageName, PageRegistry};

/// Everything the hydration hook needs: the root element handle, the
/// resolved component, and the parsed page state. Generic over the element
/// handle so the bootstrap logic stays independent of the DOM layer.
pub struct SetupContext<E> {
  pub el: E,
  pub component: Arc<ComponentDef>,
  pub page: PageDescriptor,
}

/// Marker for a completed hydration mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedApp {
  component: PageName,
}

impl MountedApp {
  pub fn component(&self) -> &PageName {
    &self.component
  }
}

/// Parse the embedded page state, resolve the component, and invoke `setup`
/// exactly once for the hydration mount onto `root`. Resolution failures
/// propagate before `setup` runs; the DOM is untouched on error.
pub fn boot<E, F>(
  registry: &PageRegistry,
  root: E,
  state_json: &str,
  setup: F,
) -> Result<MountedApp, LaminaError>
where
  F: FnOnce(SetupContext<E>) -> Result<(), LaminaError>,
{
  let page: PageDescriptor = serde_json::from_str(state_json)
    .map_err(|e| LaminaError::validation(format!("Parse page state: {e}")))?;
  let component = registry.resolve(&page.component)?;
  let mounted = MountedApp { component: page.component.clone() };
  setup(SetupContext { el: root, component, page })?;
  Ok(mounted)
}
