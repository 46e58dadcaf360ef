//! Collecting field values from the user.

use std::io::{self, BufRead, Write};

use tabula_types::{FieldError, FieldSpec, FieldValue};
use thiserror::Error;

pub const DEFAULT_PROMPT_SUFFIX: &str = ": ";

#[derive(Debug, Error)]
pub enum PromptError {
    /// The user's answer did not satisfy the field's kind.
    #[error(transparent)]
    Invalid(#[from] FieldError),
    /// The interaction channel itself failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Asks the user for one field value and validates it.
pub trait Prompter {
    fn prompt(&mut self, spec: &FieldSpec) -> Result<FieldValue, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn prompt(&mut self, spec: &FieldSpec) -> Result<FieldValue, PromptError> {
        (**self).prompt(spec)
    }
}

/// Line-oriented prompter: writes the prompt, reads one line, validates it.
#[derive(Debug)]
pub struct LinePrompter<I, O> {
    input: I,
    output: O,
    suffix: String,
}

impl<I: BufRead, O: Write> LinePrompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            suffix: DEFAULT_PROMPT_SUFFIX.to_string(),
        }
    }

    /// Text written after every prompt.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<I: BufRead, O: Write> Prompter for LinePrompter<I, O> {
    fn prompt(&mut self, spec: &FieldSpec) -> Result<FieldValue, PromptError> {
        write!(self.output, "{}{}", spec.prompt(), self.suffix)?;
        self.output.flush()?;

        let Some(answer) = self.read_answer()? else {
            return Err(FieldError::Missing {
                field: spec.name().to_string(),
            }
            .into());
        };
        Ok(spec.parse(&answer)?)
    }
}
