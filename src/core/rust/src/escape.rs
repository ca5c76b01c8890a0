/* src/core/rust/src/escape.rs */

use std::fmt::Write;

/// Escape a JSON string for embedding in HTML. Non-ASCII characters and the
/// HTML-significant `<`, `>`, `&` (plus U+2028/U+2029, which are legal JSON
/// but not legal inline script) become `\uXXXX` escapes. The output is
/// ASCII-only and still valid JSON.
pub fn ascii_escape_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => push_unicode_escape(&mut out, ch),
      c if c.is_ascii() => out.push(c),
      c => push_unicode_escape(&mut out, c),
    }
  }
  out
}

fn push_unicode_escape(out: &mut String, ch: char) {
  let mut units = [0u16; 2];
  for unit in ch.encode_utf16(&mut units) {
    // Writing to a String cannot fail
    let _ = write!(out, "\\u{unit:04x}");
  }
}

/// Escape text for HTML text content or attribute values.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ascii_passthrough() {
    assert_eq!(ascii_escape_json(r#"{"title":"Hi"}"#), r#"{"title":"Hi"}"#);
  }

  #[test]
  fn html_significant_chars_escaped() {
    assert_eq!(ascii_escape_json("</script>"), r"\u003c/script\u003e");
    assert_eq!(ascii_escape_json("a&b"), r"a\u0026b");
  }

  #[test]
  fn non_ascii_escaped_as_utf16_units() {
    assert_eq!(ascii_escape_json("é"), r"\u00e9");
    // Astral plane character becomes a surrogate pair
    assert_eq!(ascii_escape_json("𝄞"), r"\ud834\udd1e");
  }

  #[test]
  fn escaped_json_still_parses() {
    let escaped = ascii_escape_json(r#"{"name":"<Ümlaut & Sons>"}"#);
    let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();
    assert_eq!(value["name"], "<Ümlaut & Sons>");
  }

  #[test]
  fn escape_html_covers_attribute_context() {
    assert_eq!(escape_html(r#"a"b'c<d>e&f"#), "a&quot;b&#39;c&lt;d&gt;e&amp;f");
  }
}
