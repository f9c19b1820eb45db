//! Placeholder discovery.

use std::collections::HashSet;

use super::error::TemplateError;
use super::{Node, Template};

/// Collects placeholder names from every text in `texts`, in first-seen order
/// and without duplicates.
///
/// Escaped variables (`{{x}}`) and section openers (`{{#x}}`) count as
/// placeholders, including those nested inside sections. Unescaped
/// variables, inverted section names and `{{.}}` do not.
pub fn extract_variables<S: AsRef<str>>(texts: &[S]) -> Result<Vec<String>, TemplateError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for text in texts {
        let template = Template::parse(text.as_ref())?;
        collect(template.nodes(), &mut seen, &mut names);
    }
    Ok(names)
}

pub(crate) fn collect(nodes: &[Node], seen: &mut HashSet<String>, names: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Variable { name, escape: true } => push_unique(name, seen, names),
            Node::Section {
                name,
                inverted,
                children,
            } => {
                if !inverted {
                    push_unique(name, seen, names);
                }
                collect(children, seen, names);
            }
            Node::Variable { escape: false, .. } | Node::Text(_) | Node::Partial(_) => {}
        }
    }
}

fn push_unique(name: &str, seen: &mut HashSet<String>, names: &mut Vec<String>) {
    if name == "." {
        return;
    }
    if seen.insert(name.to_string()) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_and_sections_in_order() {
        let names = extract_variables(&["{{x}} {{#y}}inner{{/y}} {{x}}"]).unwrap();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn title_then_contents() {
        let names = extract_variables(&[
            "Hello {{name}}",
            "Body {{#is_active}}active{{/is_active}}",
        ])
        .unwrap();
        assert_eq!(names, vec!["name", "is_active"]);
    }

    #[test]
    fn dedup_across_texts() {
        let names = extract_variables(&["{{a}}{{b}}", "{{b}}{{c}}{{a}}"]).unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn nested_names_are_collected() {
        let names = extract_variables(&["{{#is_x}}{{who}}{{/is_x}}"]).unwrap();
        assert_eq!(names, vec!["is_x", "who"]);
    }

    #[test]
    fn non_placeholders_are_skipped() {
        let names =
            extract_variables(&["{{{raw}}}{{&amp}}{{^inv}}{{.}}{{/inv}}{{! c }}{{> p}}"]).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn no_tokens() {
        let names = extract_variables(&["", "plain text"]).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn parse_error_propagates() {
        assert!(extract_variables(&["ok", "{{#open}}"]).is_err());
    }
}
