/* src/core/rust/src/app.rs */

use crate::component::ComponentDef;
use crate::errors::LaminaError;
use crate::registry::PageRegistry;
use crate::shell::AppShell;

/// Parts extracted from an `SsrApp`. Adapter crates consume this to build
/// framework-specific hosts; the client bootstrap consumes the registry.
pub struct SsrParts {
  pub registry: PageRegistry,
  pub shell: AppShell,
}

/// Builder binding a component set to a shell configuration.
pub struct SsrApp {
  components: Vec<ComponentDef>,
  shell: AppShell,
}

impl SsrApp {
  pub fn new() -> Self {
    Self { components: Vec::new(), shell: AppShell::default() }
  }

  pub fn component(mut self, def: ComponentDef) -> Self {
    self.components.push(def);
    self
  }

  pub fn shell(mut self, shell: AppShell) -> Self {
    self.shell = shell;
    self
  }

  /// Consume the builder. Fails when two components share a page name.
  pub fn into_parts(self) -> Result<SsrParts, LaminaError> {
    Ok(SsrParts { registry: PageRegistry::from_components(self.components)?, shell: self.shell })
  }
}

impl Default for SsrApp {
  fn default() -> Self {
    Self::new()
  }
}
