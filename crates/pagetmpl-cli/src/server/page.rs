//! HTML for the form, confirmation and error pages.

use pagetmpl_core::form::{FieldKind, FormField, FormSchema};
use pagetmpl_core::source::TemplateSource;
use pagetmpl_core::template::escape_html;
use std::fmt::Write;

use super::handlers::{Submission, VAR_PREFIX};

const PAGE_TITLE: &str = "Page Template";

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; color: #23221e; background: #f8f7f6; }
.layout { display: flex; flex-wrap: wrap; gap: 32px; padding: 20px; }
main { flex: 1 1 600px; min-width: 600px; }
aside { flex: 0 1 900px; }
h1 { font-size: 1.6rem; }
.group { margin-bottom: 16px; }
.group > label, .group > .label { display: block; font-weight: 600; margin-bottom: 4px; }
.row { display: flex; gap: 16px; }
.row input { flex-grow: 1; }
input[type=text] { width: 100%; padding: 6px 8px; box-sizing: border-box; }
pre { background: #fff; border: 1px solid #d6d3d0; padding: 12px; white-space: pre-wrap; }
.notice { background: #fdecea; border: 1px solid #e01e5a; padding: 8px 12px; }
button { padding: 6px 16px; }
"#;

/// What the form page shows.
#[derive(Debug, Default)]
pub(super) struct FormView {
    pub source: Option<TemplateSource>,
    pub schema: FormSchema,
    pub error: Option<String>,
}

impl FormView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(source: TemplateSource, schema: FormSchema) -> Self {
        Self {
            source: Some(source),
            schema,
            error: None,
        }
    }

    pub fn broken(source: TemplateSource, error: String) -> Self {
        Self {
            source: Some(source),
            schema: FormSchema::default(),
            error: Some(error),
        }
    }
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <style>{style}</style>
  </head>
  <body>
{body}
  </body>
</html>"#,
        title = PAGE_TITLE,
        style = STYLE,
        body = body,
    )
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}" />"#,
        escape_html(name),
        escape_html(value)
    )
}

fn field_html(index: usize, field: &FormField) -> String {
    let id = format!("field-{index}");
    let name = escape_html(&format!("{VAR_PREFIX}{}", field.name));
    let label = escape_html(&field.name);
    match field.kind {
        FieldKind::Text => format!(
            r#"<div class="group"><label for="{id}">{label}</label><input type="text" id="{id}" name="{name}" value="" /></div>"#
        ),
        FieldKind::Toggle => format!(
            r#"<div class="group"><span class="label">{label}</span><label for="{id}"><input type="checkbox" id="{id}" name="{name}" value="true" /> Enable</label></div>"#
        ),
    }
}

pub(super) fn render_form(view: &FormView) -> String {
    let url = view.source.as_ref().map(|s| s.url.as_str()).unwrap_or("");
    let title = view.source.as_ref().map(|s| s.title.as_str()).unwrap_or("");
    let contents = view
        .source
        .as_ref()
        .map(|s| s.contents.as_str())
        .unwrap_or("");

    let mut main = String::new();
    let _ = write!(
        main,
        r#"    <div class="layout">
    <main>
      <h1>{heading}</h1>
      <form method="get" action="/" class="group">
        <label for="template">Template URL</label>
        <div class="row">
          <input type="text" id="template" name="template" value="{url}" />
          <button type="submit">Update</button>
        </div>
      </form>
      <div class="group">
        <label for="title">Page title</label>
        <input type="text" id="title" value="{title}" readonly />
      </div>
"#,
        heading = PAGE_TITLE,
        url = escape_html(url),
        title = escape_html(title),
    );

    if let Some(err) = &view.error {
        let _ = writeln!(
            main,
            r#"      <p class="notice">This template cannot be parsed: {}</p>"#,
            escape_html(err)
        );
    }

    if let Some(source) = view.source.as_ref().filter(|_| view.error.is_none()) {
        main.push_str(r#"      <form method="post" action="/create" target="_blank">"#);
        main.push('\n');
        for (name, value) in [
            ("template_url", source.url.as_str()),
            ("title", source.title.as_str()),
            ("contents", source.contents.as_str()),
            ("project_name", source.project_name.as_str()),
        ] {
            let _ = writeln!(main, "        {}", hidden(name, value));
        }
        for (i, field) in view.schema.fields.iter().enumerate() {
            let _ = writeln!(main, "        {}", field_html(i, field));
        }
        main.push_str("        <button type=\"submit\">Create</button>\n      </form>\n");
    }

    let _ = write!(
        main,
        r#"    </main>
    <aside>
      <label for="contents">Contents</label>
      <pre id="contents">{}</pre>
    </aside>
    </div>"#,
        escape_html(contents)
    );

    layout(&main)
}

pub(super) fn render_confirm(sub: &Submission, empty_fields: &[String]) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "    <main style=\"padding: 20px\">\n      <h1>{}</h1>\n      <p class=\"notice\">Some fields are empty. Create the page anyway?</p>\n      <ul>",
        PAGE_TITLE
    );
    for name in empty_fields {
        let _ = writeln!(body, "        <li>{}</li>", escape_html(name));
    }
    body.push_str("      </ul>\n      <form method=\"post\" action=\"/create\">\n");
    for (name, value) in [
        ("template_url", sub.source.url.as_str()),
        ("title", sub.source.title.as_str()),
        ("contents", sub.source.contents.as_str()),
        ("project_name", sub.source.project_name.as_str()),
        ("confirmed", "1"),
    ] {
        let _ = writeln!(body, "        {}", hidden(name, value));
    }
    for (name, value) in &sub.raw_values {
        let _ = writeln!(
            body,
            "        {}",
            hidden(&format!("{VAR_PREFIX}{name}"), value)
        );
    }
    body.push_str("        <button type=\"submit\">Create anyway</button>\n      </form>\n");
    let _ = write!(
        body,
        "      <p><a href=\"/?template={}\">Back to the form</a></p>\n    </main>",
        escape_html(&pagetmpl_core::url_model::encode_uri_component(&sub.source.url))
    );
    layout(&body)
}

pub(super) fn render_error(message: &str) -> String {
    layout(&format!(
        "    <main style=\"padding: 20px\">\n      <h1>{}</h1>\n      <p class=\"notice\">{}</p>\n    </main>",
        PAGE_TITLE,
        escape_html(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> TemplateSource {
        TemplateSource {
            url: "https://scrapbox.io/team/tmpl".to_string(),
            title: "Hello {{name}}".to_string(),
            contents: "<b>{{#is_x}}x{{/is_x}}</b>".to_string(),
            project_name: "team".to_string(),
        }
    }

    #[test]
    fn empty_form_has_no_create_button() {
        let html = render_form(&FormView::empty());
        assert!(html.contains("name=\"template\""));
        assert!(!html.contains("action=\"/create\""));
    }

    #[test]
    fn loaded_form_renders_one_control_per_field() {
        let schema = FormSchema::from_variables(&["name", "is_x"], "is_");
        let html = render_form(&FormView::loaded(source(), schema));
        assert!(html.contains(r#"type="text" id="field-0" name="v:name""#));
        assert!(html.contains(r#"type="checkbox" id="field-1" name="v:is_x" value="true""#));
        assert!(html.contains("target=\"_blank\""));
        // Contents are escaped in the preview.
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn broken_template_shows_notice_without_fields() {
        let html = render_form(&FormView::broken(source(), "unclosed tag at offset 0".into()));
        assert!(html.contains("cannot be parsed"));
        assert!(!html.contains("action=\"/create\""));
    }

    #[test]
    fn confirm_page_carries_values_forward() {
        let sub = Submission {
            source: source(),
            raw_values: vec![("name".to_string(), String::new())],
            confirmed: false,
        };
        let html = render_confirm(&sub, &["name".to_string()]);
        assert!(html.contains(r#"name="confirmed" value="1""#));
        assert!(html.contains(r#"name="v:name" value="""#));
        assert!(html.contains("<li>name</li>"));
    }
}
