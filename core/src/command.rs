//! The command trait and its prompt → execute → report lifecycle.

use std::error::Error;

use tabula_types::{FieldError, FieldSet, FieldValues};
use tracing::{debug, error, info, warn};

use crate::display::Display;
use crate::errors::{Failure, UnhandledError};
use crate::prompt::{PromptError, Prompter};

/// One user-invocable action against a receiver `R`.
///
/// Concrete commands declare their fields when they are built and supply
/// `execute`; the lifecycle in [`run`] does the rest.
pub trait Command<R: ?Sized> {
    /// The command's closed set of user-facing failures. The `Display` text is
    /// exactly what the user sees.
    type Error: Error;

    fn label(&self) -> &str;

    fn fields(&self) -> &FieldSet;

    /// Domain logic. Lower-level receiver failures must be translated into
    /// `Failure::Command` here; anything left as `Failure::Unhandled` escapes
    /// the lifecycle. A command must not leave the receiver partially changed
    /// when it fails.
    ///
    /// `out` is the default channel for the command's own messages; whatever
    /// is left in it after a successful run is flushed by the lifecycle.
    fn execute(
        &self,
        receiver: &mut R,
        values: &FieldValues,
        out: &mut Display<'_>,
    ) -> Result<(), Failure<Self::Error>>;
}

/// How a lifecycle run ended, when it did not fail unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// A field failed validation; `execute` never ran.
    InvalidInput(FieldError),
    /// `execute` returned a command-level error; carries the rendered message.
    Rejected(String),
}

impl Outcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Collect every declared field, execute, and report.
///
/// Field-validation and command-level failures each render exactly one
/// message through `out`. Unhandled failures, including broken input, are
/// returned as [`UnhandledError`] after discarding any partial output.
pub fn run<R, C>(
    command: &C,
    receiver: &mut R,
    prompter: &mut dyn Prompter,
    out: &mut Display<'_>,
) -> Result<Outcome, UnhandledError>
where
    R: ?Sized,
    C: Command<R> + ?Sized,
{
    let label = command.label();
    let values = match collect_fields(command.fields(), prompter) {
        Ok(values) => values,
        Err(PromptError::Invalid(err)) => {
            warn!(command = label, field = err.field(), "Field validation failed");
            out.clear();
            out.popup(&err);
            return Ok(Outcome::InvalidInput(err));
        }
        Err(PromptError::Io(err)) => {
            error!(command = label, error = %err, "Input failed while collecting fields");
            return Err(UnhandledError::new(label, err));
        }
    };

    debug!(command = label, fields = values.len(), "Executing command");
    match command.execute(receiver, &values, out) {
        Ok(()) => {
            out.display_text();
            Ok(Outcome::Completed)
        }
        Err(Failure::Command(err)) => {
            let message = err.to_string();
            info!(command = label, %message, "Command rejected");
            out.clear();
            out.popup(&message);
            Ok(Outcome::Rejected(message))
        }
        Err(Failure::Unhandled(source)) => {
            error!(command = label, error = %source, "Command failed unexpectedly");
            out.clear();
            Err(UnhandledError::new(label, source))
        }
    }
}

fn collect_fields(
    fields: &FieldSet,
    prompter: &mut dyn Prompter,
) -> Result<FieldValues, PromptError> {
    let mut values = FieldValues::new();
    for spec in fields {
        let value = prompter.prompt(spec)?;
        debug!(field = spec.name(), kind = %spec.kind(), "Collected field");
        values.insert(spec.name(), value);
    }
    Ok(values)
}
