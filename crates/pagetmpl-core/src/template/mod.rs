//! Mustache templates: parsing, placeholder extraction and rendering.
//!
//! Supports the standard tag set: `{{name}}` (HTML-escaped), `{{{name}}}`
//! and `{{&name}}` (raw), `{{#name}}` / `{{^name}}` / `{{/name}}` sections,
//! `{{! comments }}`, `{{> partials}}` (rendered empty) and `{{=<% %>=}}`
//! delimiter changes. Values are flat: a name is looked up in the value map,
//! except `{{.}}` which is the value of the enclosing section.

mod error;
mod extract;
mod parse;
mod render;
mod value;

pub use error::TemplateError;
pub use extract::extract_variables;
pub use render::escape_html;
pub use value::{Value, Values};

use std::collections::HashSet;

/// Parsed template node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Variable { name: String, escape: bool },
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
    Partial(String),
}

/// A parsed mustache template.
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parse::parse(src)?,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Placeholder names in this template (see [`extract_variables`]).
    pub fn variables(&self) -> Vec<String> {
        variables_in(&[self])
    }

    pub fn render(&self, values: &Values) -> String {
        render::render_nodes(&self.nodes, values)
    }
}

/// Placeholder names across already-parsed templates, deduplicated in
/// first-seen order.
pub fn variables_in(templates: &[&Template]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for template in templates {
        extract::collect(&template.nodes, &mut seen, &mut names);
    }
    names
}

/// Parses and renders `src` in one step.
pub fn render(src: &str, values: &Values) -> Result<String, TemplateError> {
    Ok(Template::parse(src)?.render(values))
}
