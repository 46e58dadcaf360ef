//! Values collected for a command's declared fields.

use thiserror::Error;

use crate::field::{FieldKind, FieldValue};

/// A field was read that the command never declared, or read as the wrong kind.
///
/// This is a programming error in the command, not something the user can fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldAccessError {
    #[error("field '{0}' was never declared")]
    Undeclared(String),
    #[error("field '{name}' is {declared}, not {requested}")]
    WrongKind {
        name: String,
        declared: FieldKind,
        requested: FieldKind,
    },
}

/// Collected values keyed by field name, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, FieldValue)>,
}

impl FieldValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    fn require(&self, name: &str) -> Result<&FieldValue, FieldAccessError> {
        self.get(name)
            .ok_or_else(|| FieldAccessError::Undeclared(name.to_string()))
    }

    pub fn text(&self, name: &str) -> Result<&str, FieldAccessError> {
        match self.require(name)? {
            FieldValue::Text(text) => Ok(text),
            other => Err(wrong_kind(name, other, FieldKind::Text)),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, FieldAccessError> {
        match self.require(name)? {
            FieldValue::Integer(value) => Ok(*value),
            other => Err(wrong_kind(name, other, FieldKind::Integer)),
        }
    }

    pub fn address(&self, name: &str) -> Result<&str, FieldAccessError> {
        match self.require(name)? {
            FieldValue::Address(address) => Ok(address),
            other => Err(wrong_kind(name, other, FieldKind::Address)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn wrong_kind(name: &str, found: &FieldValue, requested: FieldKind) -> FieldAccessError {
    FieldAccessError::WrongKind {
        name: name.to_string(),
        declared: found.kind(),
        requested,
    }
}
