/* src/engine/rust/src/render.rs */

//! Server bootstrap: one page descriptor in, one rendered page out.
//! Pure functions over the registry, no I/O.

use lamina_core::{AppShell, LaminaError, PageDescriptor, PageRegistry};
use serde::{Deserialize, Serialize};

/// Output of a server render: fragments for the document `<head>` and the
/// shell-wrapped body markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
  pub head: Vec<String>,
  pub body: String,
}

/// Render a page to a string. Straight-line sequence: resolve the component,
/// render it with the descriptor's props, collect head fragments, wrap the
/// markup in the shell root with the embedded page state. One atomic render
/// per call; every failure propagates unchanged to the caller.
pub fn render_page(
  registry: &PageRegistry,
  shell: &AppShell,
  page: &PageDescriptor,
) -> Result<RenderResult, LaminaError> {
  let component = registry.resolve(&page.component)?;
  let inner = (component.render)(&page.props)?;
  let head = component.head.as_ref().map(|head| head(&page.props)).unwrap_or_default();

  let state = serde_json::to_string(page)
    .map_err(|e| LaminaError::internal(format!("Serialize page state: {e}")))?;
  Ok(RenderResult { head, body: shell.wrap(&state, &inner) })
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use lamina_core::{ComponentDef, PageName, escape_html};
  use serde_json::json;

  use super::*;

  fn sample_registry() -> PageRegistry {
    let home = ComponentDef {
      name: PageName::new("Home").unwrap(),
      render: Arc::new(|props| {
        let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("Welcome");
        Ok(format!("<h1>{}</h1>", escape_html(title)))
      }),
      head: Some(Arc::new(|props| {
        let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("Welcome");
        vec![format!("<title>{}</title>", escape_html(title))]
      })),
    };
    let bare = ComponentDef {
      name: PageName::new("Bare").unwrap(),
      render: Arc::new(|_| Ok("<p>bare</p>".to_string())),
      head: None,
    };
    PageRegistry::from_components([home, bare]).unwrap()
  }

  fn descriptor(component: &str, props: serde_json::Value) -> PageDescriptor {
    PageDescriptor::new(PageName::new(component).unwrap(), props).url("/")
  }

  #[test]
  fn renders_component_markup_with_props() {
    let registry = sample_registry();
    let result =
      render_page(&registry, &AppShell::default(), &descriptor("Home", json!({"title": "Hi"})))
        .unwrap();

    assert!(result.body.contains("<h1>Hi</h1>"));
    assert!(result.body.starts_with(r#"<div id="app" data-page="#));
    assert_eq!(result.head, vec!["<title>Hi</title>".to_string()]);
  }

  #[test]
  fn body_embeds_parseable_page_state() {
    let registry = sample_registry();
    let page = descriptor("Home", json!({"title": "Hi"}));
    let result = render_page(&registry, &AppShell::default(), &page).unwrap();

    // Pull the attribute back out and undo the attribute escaping
    let start = result.body.find("data-page=\"").unwrap() + "data-page=\"".len();
    let end = result.body[start..].find('"').unwrap() + start;
    let state = result.body[start..end].replace("&quot;", "\"").replace("&amp;", "&");
    let parsed: PageDescriptor = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed, page);
  }

  #[test]
  fn render_is_deterministic() {
    let registry = sample_registry();
    let page = descriptor("Home", json!({"title": "Hi", "count": 3}));
    let first = render_page(&registry, &AppShell::default(), &page).unwrap();
    let second = render_page(&registry, &AppShell::default(), &page).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn missing_page_produces_no_output() {
    let registry = sample_registry();
    let err = render_page(&registry, &AppShell::default(), &descriptor("Missing", json!({})))
      .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
  }

  #[test]
  fn component_without_head_yields_empty_head() {
    let registry = sample_registry();
    let result =
      render_page(&registry, &AppShell::default(), &descriptor("Bare", json!({}))).unwrap();
    assert!(result.head.is_empty());
    assert!(result.body.contains("<p>bare</p>"));
  }

  #[test]
  fn component_render_failure_passes_through() {
    let failing = ComponentDef {
      name: PageName::new("Broken").unwrap(),
      render: Arc::new(|_| Err(LaminaError::internal("boom"))),
      head: None,
    };
    let registry = PageRegistry::from_components([failing]).unwrap();
    let err = render_page(&registry, &AppShell::default(), &descriptor("Broken", json!({})))
      .unwrap_err();
    assert_eq!(err, LaminaError::internal("boom"));
  }
}
