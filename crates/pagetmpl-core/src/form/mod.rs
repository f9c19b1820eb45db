//! Form model derived from template placeholders.
//!
//! The field set is inferred from the extracted placeholder names: each name
//! maps to a [`FieldKind`] by prefix, and the schema drives both the rendered
//! controls and the normalization of submitted values.

use serde::Serialize;

use crate::template::{Value, Values};

/// Default prefix that marks a placeholder as a boolean flag.
pub const DEFAULT_BOOLEAN_PREFIX: &str = "is_";

/// Which control a placeholder is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-text input, defaults to the empty string.
    Text,
    /// Checkbox, defaults to false.
    Toggle,
}

impl FieldKind {
    /// Classifies a placeholder name.
    pub fn classify(name: &str, boolean_prefix: &str) -> Self {
        if name.starts_with(boolean_prefix) {
            FieldKind::Toggle
        } else {
            FieldKind::Text
        }
    }

    pub fn default_value(self) -> Value {
        match self {
            FieldKind::Text => Value::Text(String::new()),
            FieldKind::Toggle => Value::Flag(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
}

/// Ordered field list for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn from_variables<S: AsRef<str>>(names: &[S], boolean_prefix: &str) -> Self {
        let fields = names
            .iter()
            .map(|n| {
                let name = n.as_ref();
                FormField {
                    name: name.to_string(),
                    kind: FieldKind::classify(name, boolean_prefix),
                }
            })
            .collect();
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Coerces `values` to match the schema.
    ///
    /// Toggle fields holding anything other than a boolean become `false`;
    /// fields missing from `values` get their default. Entries not in the
    /// schema are left alone.
    pub fn normalize(&self, values: &mut Values) {
        for field in &self.fields {
            let slot = values
                .entry(field.name.clone())
                .or_insert_with(|| field.kind.default_value());
            if field.kind == FieldKind::Toggle && slot.as_flag().is_none() {
                *slot = Value::Flag(false);
            }
        }
    }

    /// Names of text fields whose value is empty or missing, in schema order.
    pub fn empty_text_fields(&self, values: &Values) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Text)
            .filter(|f| values.get(&f.name).map_or(true, Value::is_empty_text))
            .map(|f| f.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(FieldKind::classify("is_done", "is_"), FieldKind::Toggle);
        assert_eq!(FieldKind::classify("name", "is_"), FieldKind::Text);
        assert_eq!(FieldKind::classify("island", "is_"), FieldKind::Text);
        assert_eq!(FieldKind::classify("has_x", "has_"), FieldKind::Toggle);
    }

    #[test]
    fn schema_preserves_order() {
        let schema = FormSchema::from_variables(&["name", "is_active", "date"], "is_");
        let kinds: Vec<_> = schema.fields.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::Text, FieldKind::Toggle, FieldKind::Text]
        );
    }

    #[test]
    fn normalize_fills_defaults_per_kind() {
        let schema = FormSchema::from_variables(&["name", "is_active"], "is_");
        let mut d = Values::new();
        schema.normalize(&mut d);
        assert_eq!(d.get("name"), Some(&Value::from("")));
        assert_eq!(d.get("is_active"), Some(&Value::Flag(false)));
    }

    #[test]
    fn normalize_coerces_untouched_toggles() {
        let schema = FormSchema::from_variables(&["name", "is_a", "is_b", "is_c"], "is_");
        let mut values = Values::new();
        values.insert("name".to_string(), Value::from("x"));
        values.insert("is_a".to_string(), Value::from("on"));
        values.insert("is_b".to_string(), Value::Flag(true));
        schema.normalize(&mut values);
        assert_eq!(values.get("is_a"), Some(&Value::Flag(false)));
        assert_eq!(values.get("is_b"), Some(&Value::Flag(true)));
        assert_eq!(values.get("is_c"), Some(&Value::Flag(false)));
        assert_eq!(values.get("name"), Some(&Value::from("x")));
    }

    #[test]
    fn empty_text_fields_ignores_toggles() {
        let schema = FormSchema::from_variables(&["a", "is_b", "c"], "is_");
        let mut values = Values::new();
        values.insert("c".to_string(), Value::from("filled"));
        schema.normalize(&mut values);
        assert_eq!(schema.empty_text_fields(&values), vec!["a"]);
    }
}
