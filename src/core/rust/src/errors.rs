/* src/core/rust/src/errors.rs */

use std::fmt;

/// Error surface shared across the lamina crates. Each variant carries a
/// stable wire code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaminaError {
  /// Page name absent from the registry.
  NotFound(String),
  /// Malformed input: invalid page name, bad embedded state, bad descriptor.
  Validation(String),
  /// Failure inside a component factory or the rendering pipeline.
  Internal(String),
}

impl LaminaError {
  pub fn not_found(message: impl Into<String>) -> Self {
    Self::NotFound(message.into())
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Stable code for wire serialization.
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound(_) => "NOT_FOUND",
      Self::Validation(_) => "VALIDATION",
      Self::Internal(_) => "INTERNAL",
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Self::NotFound(m) | Self::Validation(m) | Self::Internal(m) => m,
    }
  }
}

impl fmt::Display for LaminaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code(), self.message())
  }
}

impl std::error::Error for LaminaError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_stable() {
    assert_eq!(LaminaError::not_found("x").code(), "NOT_FOUND");
    assert_eq!(LaminaError::validation("x").code(), "VALIDATION");
    assert_eq!(LaminaError::internal("x").code(), "INTERNAL");
  }

  #[test]
  fn display_includes_code_and_message() {
    let err = LaminaError::not_found("Page 'Missing' not found");
    assert_eq!(err.to_string(), "NOT_FOUND: Page 'Missing' not found");
  }
}
