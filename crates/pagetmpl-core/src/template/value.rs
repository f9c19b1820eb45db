//! Values substituted into templates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single placeholder value: free text or a boolean flag.
///
/// Serializes untagged, so `{"name": "World", "is_active": true}` maps
/// directly onto a [`Values`] map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Text(String),
}

/// Placeholder name → value.
pub type Values = HashMap<String, Value>;

impl Value {
    /// Section truthiness: `true` and non-empty text open a section.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Flag(b) => *b,
            Value::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            Value::Text(_) => None,
        }
    }

    /// True for the empty string. Flags are never empty.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Flag(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Flag(true).is_truthy());
        assert!(!Value::Flag(false).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(!Value::from("").is_truthy());
    }

    #[test]
    fn untagged_json() {
        let values: Values =
            serde_json::from_str(r#"{"name": "World", "is_active": true}"#).unwrap();
        assert_eq!(values.get("name"), Some(&Value::from("World")));
        assert_eq!(values.get("is_active"), Some(&Value::Flag(true)));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Flag(false).to_string(), "false");
        assert_eq!(Value::from("abc").to_string(), "abc");
    }
}
