// SPDX-License-Identifier: MPL-2.0
//! CSS-like selectors for addressing document elements.
//!
//! Supported syntax is the subset widget bindings need: comma-separated
//! groups of compound selectors made of an optional tag name followed by any
//! number of `#id`, `.class`, `[attr]`, `[attr=value]` and `[attr="value"]`
//! parts. Combinators (descendant, child, sibling) are not supported.

use super::Element;
use std::fmt;
use std::str::FromStr;

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector (or one of its groups) is empty.
    Empty { position: usize },
    /// An identifier was expected at `position`.
    ExpectedIdent { position: usize },
    /// A character that cannot start or continue a compound selector.
    UnexpectedChar { ch: char, position: usize },
    /// An attribute selector is missing its closing `]`.
    UnterminatedAttribute { position: usize },
    /// A quoted attribute value is missing its closing quote.
    UnterminatedString { position: usize },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Empty { position } => write!(f, "empty selector at {position}"),
            SelectorError::ExpectedIdent { position } => {
                write!(f, "expected identifier at {position}")
            }
            SelectorError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected '{ch}' at {position}")
            }
            SelectorError::UnterminatedAttribute { position } => {
                write!(f, "unterminated attribute selector starting at {position}")
            }
            SelectorError::UnterminatedString { position } => {
                write!(f, "unterminated string starting at {position}")
            }
        }
    }
}

impl std::error::Error for SelectorError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Condition {
    Id(String),
    Class(String),
    HasAttribute(String),
    AttributeEquals(String, String),
}

impl Condition {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Condition::Id(id) => element.attribute("id") == Some(id.as_str()),
            Condition::Class(class) => element.has_class(class),
            Condition::HasAttribute(name) => element.attribute(name).is_some(),
            Condition::AttributeEquals(name, value) => {
                element.attribute(name) == Some(value.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    conditions: Vec<Condition>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(element.tag()) {
                return false;
            }
        }
        self.conditions.iter().all(|condition| condition.matches(element))
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.conditions.is_empty()
    }
}

/// A parsed selector: an element matches if any group matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<Compound>,
}

impl Selector {
    /// Parses a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let groups = Parser::new(input).parse_list()?;
        Ok(Self {
            source: input.trim().to_string(),
            groups,
        })
    }

    /// Returns `true` if the element matches any group of this selector.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        self.groups.iter().any(|group| group.matches(element))
    }

    /// The selector as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Parser
// =============================================================================

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Compound>, SelectorError> {
        let mut groups = Vec::new();
        loop {
            self.skip_whitespace();
            groups.push(self.parse_compound()?);
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(groups),
                Some(',') => {
                    self.bump();
                }
                Some(ch) => {
                    return Err(SelectorError::UnexpectedChar {
                        ch,
                        position: self.pos,
                    })
                }
            }
        }
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();

        if self.peek().is_some_and(is_ident_char) {
            compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
        } else if self.peek() == Some('*') {
            // `*` alone matches every element.
            self.bump();
            compound.conditions = self.parse_conditions()?;
            return Ok(compound);
        }

        compound.conditions = self.parse_conditions()?;

        if compound.is_empty() {
            return Err(match self.peek() {
                Some(ch) if ch != ',' => SelectorError::UnexpectedChar {
                    ch,
                    position: self.pos,
                },
                _ => SelectorError::Empty { position: start },
            });
        }
        Ok(compound)
    }

    fn parse_conditions(&mut self) -> Result<Vec<Condition>, SelectorError> {
        let mut conditions = Vec::new();
        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    conditions.push(Condition::Id(self.parse_ident()?));
                }
                Some('.') => {
                    self.bump();
                    conditions.push(Condition::Class(self.parse_ident()?));
                }
                Some('[') => conditions.push(self.parse_attribute()?),
                _ => return Ok(conditions),
            }
        }
    }

    fn parse_attribute(&mut self) -> Result<Condition, SelectorError> {
        let start = self.pos;
        self.bump();
        self.skip_whitespace();
        let name = self.parse_ident()?;
        self.skip_whitespace();

        match self.bump() {
            Some(']') => Ok(Condition::HasAttribute(name)),
            Some('=') => {
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => self.parse_quoted(quote)?,
                    _ => self.parse_ident()?,
                };
                self.skip_whitespace();
                match self.bump() {
                    Some(']') => Ok(Condition::AttributeEquals(name, value)),
                    _ => Err(SelectorError::UnterminatedAttribute { position: start }),
                }
            }
            _ => Err(SelectorError::UnterminatedAttribute { position: start }),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        let start = self.pos;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(ch) if ch == quote => return Ok(value),
                Some(ch) => value.push(ch),
                None => return Err(SelectorError::UnterminatedString { position: start }),
            }
        }
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.bump();
        }
        if self.pos == start {
            return Err(SelectorError::ExpectedIdent { position: start });
        }
        Ok(self.input[start..self.pos].to_string())
    }
}
