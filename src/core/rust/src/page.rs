/* src/core/rust/src/page.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::LaminaError;

/// Validated page identifier: `/`-separated segments of ASCII alphanumerics,
/// `_` and `-`, e.g. `"Home"` or `"Users/Show"`. Serde goes through the same
/// validation, so a malformed name is rejected at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageName(String);

impl PageName {
  pub fn new(name: impl Into<String>) -> Result<Self, LaminaError> {
    let name = name.into();
    if name.is_empty() {
      return Err(LaminaError::validation("Page name must not be empty"));
    }
    let segment_ok = |seg: &str| {
      !seg.is_empty() && seg.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    };
    if !name.split('/').all(segment_ok) {
      return Err(LaminaError::validation(format!("Invalid page name '{name}'")));
    }
    Ok(Self(name))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PageName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl TryFrom<String> for PageName {
  type Error = LaminaError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    Self::new(name)
  }
}

impl From<PageName> for String {
  fn from(name: PageName) -> Self {
    name.0
  }
}

impl FromStr for PageName {
  type Err = LaminaError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::new(name)
  }
}

impl AsRef<str> for PageName {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// Per-request page state: built by the hosting process on the server,
/// parsed back from the shell's state attribute on the client. Consumed
/// once, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
  pub component: PageName,
  #[serde(default)]
  pub props: Value,
  #[serde(default)]
  pub url: String,
  /// Asset version stamp forwarded by the host, when it tracks one.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl PageDescriptor {
  pub fn new(component: PageName, props: Value) -> Self {
    Self { component, props, url: String::new(), version: None }
  }

  pub fn url(mut self, url: impl Into<String>) -> Self {
    self.url = url.into();
    self
  }

  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }
}
