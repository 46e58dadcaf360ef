use tabula_core::{Command, Display, Failure, FieldSet, FieldValues};
use tabula_sheet::Spreadsheet;

use super::{ADDRESS, resolve};
use crate::errors::EditError;
use crate::labels::{Label, Message};

/// Paste command. Writes the cut buffer at the given cell or range.
#[derive(Debug)]
pub struct DoPaste {
    fields: FieldSet,
}

impl DoPaste {
    #[must_use]
    pub fn new() -> Self {
        let mut fields = FieldSet::new();
        fields.text(ADDRESS, Message::address());
        Self { fields }
    }
}

impl Default for DoPaste {
    fn default() -> Self {
        Self::new()
    }
}

impl Command<Spreadsheet> for DoPaste {
    type Error = EditError;

    fn label(&self) -> &str {
        Label::PASTE
    }

    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn execute(
        &self,
        sheet: &mut Spreadsheet,
        values: &FieldValues,
        _out: &mut Display<'_>,
    ) -> Result<(), Failure<EditError>> {
        let address = values.text(ADDRESS)?;
        let range = resolve(sheet, address)?;
        if sheet.cut_buffer().is_empty() {
            return Err(Failure::Command(EditError::EmptyCutBuffer));
        }
        let written = sheet.paste(&range);
        tracing::debug!(%range, written, "Pasted");
        Ok(())
    }
}
