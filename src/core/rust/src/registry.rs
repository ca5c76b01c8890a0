/* src/core/rust/src/registry.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::component::ComponentDef;
use crate::errors::LaminaError;
use crate::page::PageName;

/// Build-time-fixed mapping from page name to component. Immutable once
/// constructed; safe to share across concurrent renders without locking.
#[derive(Debug)]
pub struct PageRegistry {
  components: BTreeMap<PageName, Arc<ComponentDef>>,
}

impl PageRegistry {
  /// Build a registry from a component list. Duplicate names are rejected.
  pub fn from_components(
    components: impl IntoIterator<Item = ComponentDef>,
  ) -> Result<Self, LaminaError> {
    let mut map = BTreeMap::new();
    for def in components {
      let name = def.name.clone();
      if map.insert(name.clone(), Arc::new(def)).is_some() {
        return Err(LaminaError::validation(format!("Duplicate page '{name}'")));
      }
    }
    Ok(Self { components: map })
  }

  /// Look up a component by page name. Pure and deterministic; an absent
  /// name fails with `NOT_FOUND` and has no other effect.
  pub fn resolve(&self, name: &PageName) -> Result<Arc<ComponentDef>, LaminaError> {
    self
      .components
      .get(name)
      .cloned()
      .ok_or_else(|| LaminaError::not_found(format!("Page '{name}' not found")))
  }

  pub fn contains(&self, name: &PageName) -> bool {
    self.components.contains_key(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &PageName> {
    self.components.keys()
  }

  pub fn len(&self) -> usize {
    self.components.len()
  }

  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }
}
