/* src/core/rust/src/shell.rs */

use crate::escape::{ascii_escape_json, escape_html};

/// Mount-point configuration shared by the server and client bootstraps: the
/// id of the root element the app hydrates into, and the attribute carrying
/// the serialized page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShell {
  pub root_id: String,
  pub state_attr: String,
}

impl AppShell {
  pub fn new(root_id: impl Into<String>, state_attr: impl Into<String>) -> Self {
    Self { root_id: root_id.into(), state_attr: state_attr.into() }
  }

  /// Wrap rendered component markup in the shell root, embedding the page
  /// state JSON in the state attribute. The JSON is ASCII-escaped first, so
  /// attribute escaping only has quotes left to rewrite.
  pub fn wrap(&self, page_json: &str, inner_html: &str) -> String {
    let state = escape_html(&ascii_escape_json(page_json));
    format!(
      r#"<div id="{}" {}="{}">{}</div>"#,
      self.root_id, self.state_attr, state, inner_html
    )
  }
}

impl Default for AppShell {
  fn default() -> Self {
    Self { root_id: "app".to_string(), state_attr: "data-page".to_string() }
  }
}
