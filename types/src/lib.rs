//! Field types for Tabula commands.
//!
//! This crate contains the pure input model shared by the command lifecycle and
//! by concrete commands: the closed set of field kinds, declared field specs,
//! collected values, and the errors raised while validating or reading them.
//! Nothing here performs IO.

mod field;
mod values;

pub use field::{FieldError, FieldKind, FieldSet, FieldSpec, FieldValue};
pub use values::{FieldAccessError, FieldValues};
