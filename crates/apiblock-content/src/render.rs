//! Deterministic widget markup for parsed API blocks.

use crate::attrs::AttributeSet;

/// Title shown above the response body.
const RESPONSE_TITLE: &str = "Respuesta";

/// Render one block into its collapsible widget markup.
///
/// Never fails: an empty method omits the method badge, an empty path omits
/// the path element, an absent or empty response omits the response section.
/// Request and response content are emitted as markup, not re-escaped.
pub fn render_block(attrs: &AttributeSet, request: &str, response: Option<&str>) -> String {
    let method = attrs.method();
    let path = attrs.path();
    let open = if attrs.is_expanded() { " open" } else { "" };

    let mut lines: Vec<String> = Vec::with_capacity(16);
    lines.push(format!(
        r#"<details class="apiblock" data-method="{method}" data-path="{path}"{open}>"#
    ));
    lines.push(r#"  <summary class="apiblock-header">"#.to_string());
    if !method.is_empty() {
        lines.push(format!(
            r#"    <span class="apiblock-method method-{}">{method}</span>"#,
            method.to_lowercase()
        ));
    }
    if !path.is_empty() {
        lines.push(format!(r#"    <code class="apiblock-path">{path}</code>"#));
    }
    lines.push(r#"    <span class="apiblock-chevron" aria-hidden="true"></span>"#.to_string());
    lines.push("  </summary>".to_string());
    lines.push(r#"  <div class="apiblock-sections">"#.to_string());
    lines.push(r#"    <section class="apiblock-section">"#.to_string());
    lines.push(format!(r#"      <div class="apiblock-body">{request}</div>"#));
    lines.push("    </section>".to_string());
    if let Some(response) = response.filter(|r| !r.is_empty()) {
        lines.push(r#"    <section class="apiblock-section">"#.to_string());
        lines.push(format!(
            r#"      <div class="apiblock-title">{RESPONSE_TITLE}</div>"#
        ));
        lines.push(format!(r#"      <div class="apiblock-body">{response}</div>"#));
        lines.push("    </section>".to_string());
    }
    lines.push("  </div>".to_string());
    lines.push("</details>".to_string());
    lines.join("\n")
}
