/* src/client/wasm/src/lib.rs */

use lamina_client::{MountedApp, SetupContext, boot};
use lamina_core::{AppShell, LaminaError, PageRegistry};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Locate the shell root in the live document and hydrate it: read the page
/// state from the shell's state attribute and run the caller's `setup` hook
/// against the root element. Call once, from the module's startup entry.
pub fn mount<F>(
  registry: &PageRegistry,
  shell: &AppShell,
  setup: F,
) -> Result<MountedApp, LaminaError>
where
  F: FnOnce(SetupContext<Element>) -> Result<(), LaminaError>,
{
  console_error_panic_hook::set_once();

  let document = web_sys::window()
    .and_then(|w| w.document())
    .ok_or_else(|| LaminaError::internal("No document in this environment"))?;
  let root = document
    .get_element_by_id(&shell.root_id)
    .ok_or_else(|| LaminaError::validation(format!("Shell root '#{}' not found", shell.root_id)))?;
  let state = root.get_attribute(&shell.state_attr).ok_or_else(|| {
    LaminaError::validation(format!("Missing '{}' attribute on shell root", shell.state_attr))
  })?;

  // The browser already entity-decoded the attribute value; what remains is
  // the ASCII-escaped JSON the server wrote.
  boot(registry, root, &state, setup)
}

/// Convert a bootstrap error into a JS exception value for throwing across
/// the wasm boundary.
pub fn js_error(err: &LaminaError) -> JsValue {
  JsValue::from_str(&err.to_string())
}
