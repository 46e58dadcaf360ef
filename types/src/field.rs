//! Declared input fields and their validation.

use std::fmt;
use std::slice;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// `A1` or `A1:B2`, letters then digits on each side.
const ADDRESS_PATTERN: &str = r"^[A-Z]+[0-9]+(?::[A-Z]+[0-9]+)?$";

static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();

fn address_re() -> &'static Regex {
    ADDRESS_RE.get_or_init(|| Regex::new(ADDRESS_PATTERN).expect("address pattern is valid"))
}

/// The closed set of value kinds a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Any line of text, including the empty line.
    Text,
    /// A signed integer.
    Integer,
    /// A cell address (`B3`) or range expression (`B3:B7`), any case. Only
    /// the shape is checked; the value keeps the text as typed.
    Address,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Address => "address",
        }
    }

    /// Validate raw user input for a field of this kind.
    pub fn parse(self, field: &str, raw: &str) -> Result<FieldValue, FieldError> {
        match self {
            Self::Text => Ok(FieldValue::Text(raw.to_string())),
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| FieldError::NotAnInteger {
                    field: field.to_string(),
                    input: raw.to_string(),
                }),
            Self::Address => {
                if address_re().is_match(&raw.trim().to_ascii_uppercase()) {
                    Ok(FieldValue::Address(raw.to_string()))
                } else {
                    Err(FieldError::MalformedAddress {
                        field: field.to_string(),
                        input: raw.to_string(),
                    })
                }
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Address(String),
}

impl FieldValue {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Address(_) => FieldKind::Address,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Address(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// User input that failed validation while a field was being collected.
///
/// These are always shown to the user and never reach command execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("No value given for '{field}'")]
    Missing { field: String },
    #[error("'{input}' is not a whole number (field '{field}')")]
    NotAnInteger { field: String, input: String },
    #[error("'{input}' is not a cell address (field '{field}')")]
    MalformedAddress { field: String, input: String },
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::NotAnInteger { field, .. }
            | Self::MalformedAddress { field, .. } => field,
        }
    }
}

/// A declared field: name, kind and the prompt shown when collecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    prompt: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn parse(&self, raw: &str) -> Result<FieldValue, FieldError> {
        self.kind.parse(&self.name, raw)
    }
}

/// Ordered field declarations. Declaration order is prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    specs: Vec<FieldSpec>,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a name replaces its kind and prompt but
    /// keeps its original position.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        kind: FieldKind,
        prompt: impl Into<String>,
    ) -> &mut Self {
        let spec = FieldSpec::new(name, kind, prompt);
        match self.specs.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
        self
    }

    pub fn text(&mut self, name: impl Into<String>, prompt: impl Into<String>) -> &mut Self {
        self.declare(name, FieldKind::Text, prompt)
    }

    pub fn integer(&mut self, name: impl Into<String>, prompt: impl Into<String>) -> &mut Self {
        self.declare(name, FieldKind::Integer, prompt)
    }

    pub fn address(&mut self, name: impl Into<String>, prompt: impl Into<String>) -> &mut Self {
        self.declare(name, FieldKind::Address, prompt)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn iter(&self) -> slice::Iter<'_, FieldSpec> {
        self.specs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldSpec;
    type IntoIter = slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
