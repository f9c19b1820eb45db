//! Substitution of values into a parsed node tree.

use super::value::{Value, Values};
use super::Node;

/// Name that refers to the value of the innermost open section.
const IMPLICIT_ITERATOR: &str = ".";

pub(crate) fn render_nodes(nodes: &[Node], values: &Values) -> String {
    let mut out = String::new();
    let mut scope = Vec::new();
    render_into(nodes, values, &mut scope, &mut out);
    out
}

fn render_into<'v>(
    nodes: &[Node],
    values: &'v Values,
    scope: &mut Vec<&'v Value>,
    out: &mut String,
) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { name, escape } => {
                if let Some(value) = lookup(name, values, scope) {
                    let text = value.to_string();
                    if *escape {
                        escape_html_into(&text, out);
                    } else {
                        out.push_str(&text);
                    }
                }
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                let value = lookup(name, values, scope).filter(|v| v.is_truthy());
                match (value, *inverted) {
                    (Some(value), false) => {
                        scope.push(value);
                        render_into(children, values, scope, out);
                        scope.pop();
                    }
                    (None, true) => render_into(children, values, scope, out),
                    _ => {}
                }
            }
            // No partials are registered.
            Node::Partial(_) => {}
        }
    }
}

fn lookup<'v>(name: &str, values: &'v Values, scope: &[&'v Value]) -> Option<&'v Value> {
    if name == IMPLICIT_ITERATOR {
        return scope.last().copied();
    }
    values.get(name)
}

/// HTML-escapes `text` with the character set mustache uses for `{{name}}`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
}
