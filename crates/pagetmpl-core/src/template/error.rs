//! Template parse errors.

use thiserror::Error;

/// Error produced while tokenizing or nesting a mustache template.
///
/// Offsets are byte positions in the template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed tag at offset {offset}")]
    UnclosedTag { offset: usize },

    #[error("empty tag at offset {offset}")]
    EmptyTag { offset: usize },

    #[error("invalid delimiter change at offset {offset}")]
    InvalidDelimiters { offset: usize },

    #[error("unclosed section \"{name}\" opened at offset {offset}")]
    UnclosedSection { name: String, offset: usize },

    #[error("unopened section \"{name}\" at offset {offset}")]
    UnopenedSection { name: String, offset: usize },

    #[error("unclosed section \"{expected}\" at offset {offset} (found close of \"{found}\")")]
    MismatchedSection {
        expected: String,
        found: String,
        offset: usize,
    },
}
