//! Failure taxonomy for command execution.
//!
//! A command's `execute` returns either one of its own declared command-level
//! errors, which the lifecycle shows to the user, or an unhandled failure,
//! which the lifecycle hands back to its caller untouched.

use std::error::Error;
use std::fmt;

use tabula_types::FieldAccessError;
use thiserror::Error as ThisError;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Why `execute` did not complete.
pub enum Failure<E> {
    /// A deliberate, user-facing outcome from the command's closed error set.
    Command(E),
    /// Anything the command did not translate. Never shown as a command error.
    Unhandled(BoxError),
}

impl<E> Failure<E> {
    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self::Unhandled(err.into())
    }

    #[must_use]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled(_))
    }
}

impl<E> From<FieldAccessError> for Failure<E> {
    fn from(err: FieldAccessError) -> Self {
        Self::Unhandled(Box::new(err))
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(err) => f.debug_tuple("Command").field(err).finish(),
            Self::Unhandled(err) => f.debug_tuple("Unhandled").field(err).finish(),
        }
    }
}

/// A failure that escaped a command untranslated.
///
/// Fatal to the current invocation only. Callers are expected to surface it
/// (log it, report it) rather than drop it.
#[derive(Debug, ThisError)]
#[error("command `{command}` failed unexpectedly: {source}")]
pub struct UnhandledError {
    command: String,
    #[source]
    source: BoxError,
}

impl UnhandledError {
    pub fn new(command: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            command: command.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}
