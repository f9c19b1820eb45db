//! Mustache tokenizer and tree builder.
//!
//! Tokenizing is line-aware: a line holding only section, inverted, close,
//! comment, partial or delimiter tags (plus whitespace) is "standalone" and
//! its whitespace and newline are dropped, so block tags on their own line
//! leave no blank lines behind.

use super::error::TemplateError;
use super::Node;

const DEFAULT_OPEN: &str = "{{";
const DEFAULT_CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    /// `{{name}}`
    Escaped,
    /// `{{{name}}}` or `{{&name}}`
    Unescaped,
    /// `{{#name}}`
    Section,
    /// `{{^name}}`
    Inverted,
    /// `{{/name}}`
    Close,
    /// `{{! ... }}`
    Comment,
    /// `{{>name}}`
    Partial,
    /// `{{=<% %>=}}`
    Delimiters,
}

impl TagKind {
    fn from_sigil(c: char) -> Option<Self> {
        match c {
            '#' => Some(TagKind::Section),
            '^' => Some(TagKind::Inverted),
            '/' => Some(TagKind::Close),
            '!' => Some(TagKind::Comment),
            '>' => Some(TagKind::Partial),
            '=' => Some(TagKind::Delimiters),
            '{' | '&' => Some(TagKind::Unescaped),
            _ => None,
        }
    }

    /// Interpolations produce output, so a line holding one is never standalone.
    fn is_interpolation(self) -> bool {
        matches!(self, TagKind::Escaped | TagKind::Unescaped)
    }
}

#[derive(Debug)]
enum Token {
    Text(String),
    Tag {
        kind: TagKind,
        name: String,
        offset: usize,
    },
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    open: String,
    close: String,
    out: Vec<Token>,
    line: Vec<Token>,
    line_has_tag: bool,
    line_has_content: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
            out: Vec::new(),
            line: Vec::new(),
            line_has_tag: false,
            line_has_content: false,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, TemplateError> {
        let src = self.src;
        while self.pos < src.len() {
            let rest = &src[self.pos..];
            match rest.find(self.open.as_str()) {
                Some(0) => self.tag()?,
                Some(n) => {
                    self.text(&rest[..n]);
                    self.pos += n;
                }
                None => {
                    self.text(rest);
                    self.pos = src.len();
                }
            }
        }
        self.end_line();
        Ok(self.out)
    }

    fn text(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if !piece.trim().is_empty() {
                self.line_has_content = true;
            }
            self.line.push(Token::Text(piece.to_string()));
            if piece.ends_with('\n') {
                self.end_line();
            }
        }
    }

    fn end_line(&mut self) {
        let line = std::mem::take(&mut self.line);
        if self.line_has_tag && !self.line_has_content {
            self.out
                .extend(line.into_iter().filter(|t| matches!(t, Token::Tag { .. })));
        } else {
            self.out.extend(line);
        }
        self.line_has_tag = false;
        self.line_has_content = false;
    }

    fn tag(&mut self) -> Result<(), TemplateError> {
        let src = self.src;
        let offset = self.pos;
        let mut cursor = offset + self.open.len();

        let sigil = src[cursor..].chars().next();
        let kind = match sigil.and_then(TagKind::from_sigil) {
            Some(kind) => {
                // Every sigil is a single ASCII byte.
                cursor += 1;
                kind
            }
            None => TagKind::Escaped,
        };

        let close = match (sigil, kind) {
            (Some('{'), TagKind::Unescaped) => format!("}}{}", self.close),
            (_, TagKind::Delimiters) => format!("={}", self.close),
            _ => self.close.clone(),
        };
        let end = src[cursor..]
            .find(close.as_str())
            .map(|n| cursor + n)
            .ok_or(TemplateError::UnclosedTag { offset })?;
        let content = src[cursor..end].trim();
        self.pos = end + close.len();

        self.line_has_tag = true;
        if kind.is_interpolation() {
            self.line_has_content = true;
        }

        match kind {
            TagKind::Delimiters => {
                let mut parts = content.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(open), Some(close), None) if !open.contains('=') && !close.contains('=') => {
                        self.open = open.to_string();
                        self.close = close.to_string();
                    }
                    _ => return Err(TemplateError::InvalidDelimiters { offset }),
                }
            }
            TagKind::Comment => {}
            _ if content.is_empty() => return Err(TemplateError::EmptyTag { offset }),
            _ => {}
        }

        let name = match kind {
            TagKind::Comment | TagKind::Delimiters => String::new(),
            _ => content.to_string(),
        };
        self.line.push(Token::Tag { kind, name, offset });
        Ok(())
    }
}

struct OpenSection {
    name: String,
    inverted: bool,
    offset: usize,
    parent: Vec<Node>,
}

/// Parses `src` into a node tree.
pub(crate) fn parse(src: &str) -> Result<Vec<Node>, TemplateError> {
    let tokens = Tokenizer::new(src).run()?;

    let mut stack: Vec<OpenSection> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for token in tokens {
        let (kind, name, offset) = match token {
            Token::Text(text) => {
                push_text(&mut current, text);
                continue;
            }
            Token::Tag { kind, name, offset } => (kind, name, offset),
        };
        match kind {
            TagKind::Escaped => current.push(Node::Variable { name, escape: true }),
            TagKind::Unescaped => current.push(Node::Variable {
                name,
                escape: false,
            }),
            TagKind::Section | TagKind::Inverted => stack.push(OpenSection {
                name,
                inverted: kind == TagKind::Inverted,
                offset,
                parent: std::mem::take(&mut current),
            }),
            TagKind::Close => {
                let open = stack.pop().ok_or_else(|| TemplateError::UnopenedSection {
                    name: name.clone(),
                    offset,
                })?;
                if open.name != name {
                    return Err(TemplateError::MismatchedSection {
                        expected: open.name,
                        found: name,
                        offset,
                    });
                }
                let children = std::mem::replace(&mut current, open.parent);
                current.push(Node::Section {
                    name,
                    inverted: open.inverted,
                    children,
                });
            }
            TagKind::Partial => current.push(Node::Partial(name)),
            TagKind::Comment | TagKind::Delimiters => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(TemplateError::UnclosedSection {
            name: open.name,
            offset: open.offset,
        });
    }
    Ok(current)
}

fn push_text(nodes: &mut Vec<Node>, text: String) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(&text);
    } else {
        nodes.push(Node::Text(text));
    }
}
