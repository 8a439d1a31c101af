//! `#{...}` parameter placeholders.
//!
//! Each placeholder is replaced by a positional marker (`?` by default, or
//! `$1`, `$2`, … when numbered) and its expression is parsed into a
//! [`ParameterMapping`]. Mappings are collected in the order the markers
//! appear in the output.
//!
//! # Expression Grammar
//!
//! ```text
//! placeholder := source (':' jdbc_type)? (',' attribute)*
//! source      := name | '(' balanced-text ')'
//! attribute   := name '=' value
//! ```
//!
//! Whitespace around every part is ignored. `#{id:INTEGER}` is shorthand for
//! `#{id, jdbcType=INTEGER}`.

use std::cell::RefCell;

use thiserror::Error;
use tracing::trace;
use weft_scan::{Delimiters, TokenHandler, TokenScanner};

/// Attribute name produced by the `name:TYPE` shorthand.
pub const JDBC_TYPE: &str = "jdbcType";

/// A placeholder expression that could not be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("placeholder `{expression}` names no property")]
    EmptyProperty { expression: String },
    #[error("placeholder `{expression}` has an unclosed `(`")]
    UnterminatedParenthesis { expression: String },
    #[error("malformed attribute `{attribute}`: expected `name=value`")]
    MalformedAttribute { attribute: String },
    #[error("unexpected `{found}` at position {position} in placeholder `{expression}`")]
    UnexpectedCharacter {
        expression: String,
        found: char,
        position: usize,
    },
}

/// Where a parameter's value comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSource {
    /// A named property: `#{user.id}`.
    Property(String),
    /// A parenthesised expression: `#{(a + b)}`.
    Expression(String),
}

/// One parsed placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterMapping {
    pub source: ParameterSource,
    /// `name=value` attributes in written order.
    pub attributes: Vec<(String, String)>,
}

impl ParameterMapping {
    /// Parse a placeholder expression.
    pub fn parse(expression: &str) -> Result<Self, PlaceholderError> {
        let rest = expression.trim_start();
        let (source, rest) = if let Some(inner) = rest.strip_prefix('(') {
            let Some(close) = matching_paren(inner) else {
                return Err(PlaceholderError::UnterminatedParenthesis {
                    expression: expression.to_owned(),
                });
            };
            let body = inner[..close].trim();
            (
                ParameterSource::Expression(body.to_owned()),
                &inner[close + 1..],
            )
        } else {
            let end = rest.find([',', ':']).unwrap_or(rest.len());
            (
                ParameterSource::Property(rest[..end].trim().to_owned()),
                &rest[end..],
            )
        };

        let (ParameterSource::Property(name) | ParameterSource::Expression(name)) = &source;
        if name.is_empty() {
            return Err(PlaceholderError::EmptyProperty {
                expression: expression.to_owned(),
            });
        }

        let mut attributes = Vec::new();
        let mut rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix(':') {
            let end = after.find(',').unwrap_or(after.len());
            attributes.push((JDBC_TYPE.to_owned(), after[..end].trim().to_owned()));
            rest = &after[end..];
        }

        if let Some(options) = rest.strip_prefix(',') {
            for attribute in options.split(',') {
                attributes.push(parse_attribute(attribute)?);
            }
        } else if let Some(found) = rest.chars().next() {
            return Err(PlaceholderError::UnexpectedCharacter {
                expression: expression.to_owned(),
                found,
                position: expression.len() - rest.len(),
            });
        }

        Ok(Self { source, attributes })
    }

    /// Value of the last attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn jdbc_type(&self) -> Option<&str> {
        self.attribute(JDBC_TYPE)
    }
}

fn parse_attribute(attribute: &str) -> Result<(String, String), PlaceholderError> {
    match attribute.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.trim().to_owned()))
        }
        _ => Err(PlaceholderError::MalformedAttribute {
            attribute: attribute.trim().to_owned(),
        }),
    }
}

/// Offset of the `)` closing an already opened `(` in `text`.
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Marker written in place of each placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    /// The same text every time, e.g. `?`.
    Literal(String),
    /// A prefix followed by the 1-based position, e.g. `$1`, `$2`.
    Numbered(String),
}

impl Default for Marker {
    fn default() -> Self {
        Marker::Literal("?".to_owned())
    }
}

/// Text with its placeholders replaced, plus their mappings in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundText {
    pub text: String,
    pub mappings: Vec<ParameterMapping>,
}

/// Replaces `#{...}` spans with a marker and records their mappings.
///
/// The handler accumulates mappings across calls; use a fresh handler (or
/// [`bind`](Self::bind)) per statement.
#[derive(Debug, Default)]
pub struct PlaceholderHandler {
    marker: Marker,
    mappings: RefCell<Vec<ParameterMapping>>,
}

impl PlaceholderHandler {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Number of placeholders handled so far.
    pub fn len(&self) -> usize {
        self.mappings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.borrow().is_empty()
    }

    pub fn into_mappings(self) -> Vec<ParameterMapping> {
        self.mappings.into_inner()
    }

    /// Rewrite every `#{...}` in `text`, consuming the handler.
    pub fn bind(self, text: &str) -> Result<BoundText, PlaceholderError> {
        let scanner = TokenScanner::with_delimiters(Delimiters::hash_brace(), self);
        let text = scanner.parse(text)?.into_owned();
        Ok(BoundText {
            text,
            mappings: scanner.into_handler().into_mappings(),
        })
    }
}

impl TokenHandler for PlaceholderHandler {
    type Error = PlaceholderError;

    fn handle_token(&self, expression: &str) -> Result<String, PlaceholderError> {
        let mapping = ParameterMapping::parse(expression)?;
        trace!(source = ?mapping.source, "bound placeholder");
        let mut mappings = self.mappings.borrow_mut();
        mappings.push(mapping);
        Ok(match &self.marker {
            Marker::Literal(text) => text.clone(),
            Marker::Numbered(prefix) => format!("{prefix}{}", mappings.len()),
        })
    }
}

/// Rewrite every `#{...}` in `text` to `?`.
pub fn bind_placeholders(text: &str) -> Result<BoundText, PlaceholderError> {
    PlaceholderHandler::new().bind(text)
}
