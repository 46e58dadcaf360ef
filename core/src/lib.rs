//! Command lifecycle and output buffering for Tabula.
//!
//! - **`display`**: an accumulating, title-scoped text buffer that flushes to a
//!   [`Device`] and clears itself
//! - **`device`**: the rendering seam plus in-memory and writer-backed devices
//! - **`prompt`**: collecting validated field values from the user
//! - **`command`**: the [`Command`] trait and the [`run`] lifecycle
//! - **`errors`**: the command-level / unhandled failure split
//!
//! Everything here is synchronous and single-threaded: one command runs to
//! completion before the caller gets control back.

mod command;
mod device;
mod display;
mod errors;
mod prompt;

pub use command::{Command, Outcome, run};
pub use device::{Device, RecordingDevice, Render, WriterDevice};
pub use display::{Display, SEPARATOR};
pub use errors::{BoxError, Failure, UnhandledError};
pub use prompt::{DEFAULT_PROMPT_SUFFIX, LinePrompter, PromptError, Prompter};

pub use tabula_types::{
    FieldAccessError, FieldError, FieldKind, FieldSet, FieldSpec, FieldValue, FieldValues,
};
