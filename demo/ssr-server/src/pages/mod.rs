/* demo/ssr-server/src/pages/mod.rs */

use std::sync::Arc;

use lamina_core::{ComponentDef, PageName, escape_html};

fn page_name(name: &str) -> PageName {
  PageName::new(name).expect("static page name")
}

pub fn home_page() -> ComponentDef {
  ComponentDef {
    name: page_name("Home"),
    render: Arc::new(|props| {
      let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("Welcome");
      Ok(format!("<h1>{}</h1><p>Rendered on the server.</p>", escape_html(title)))
    }),
    head: Some(Arc::new(|props| {
      let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("Welcome");
      vec![format!("<title>{}</title>", escape_html(title))]
    })),
  }
}

pub fn user_profile_page() -> ComponentDef {
  ComponentDef {
    name: page_name("Users/Show"),
    render: Arc::new(|props| {
      let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("anonymous");
      let bio = props.get("bio").and_then(|v| v.as_str()).unwrap_or("");
      Ok(format!("<h1>{}</h1><p>{}</p>", escape_html(name), escape_html(bio)))
    }),
    head: None,
  }
}
