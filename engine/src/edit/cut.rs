use tabula_core::{Command, Display, Failure, FieldSet, FieldValues};
use tabula_sheet::Spreadsheet;

use super::{ADDRESS, resolve};
use crate::errors::EditError;
use crate::labels::{Label, Message};

/// Cut command.
#[derive(Debug)]
pub struct DoCut {
    fields: FieldSet,
}

impl DoCut {
    #[must_use]
    pub fn new() -> Self {
        let mut fields = FieldSet::new();
        fields.text(ADDRESS, Message::address());
        Self { fields }
    }
}

impl Default for DoCut {
    fn default() -> Self {
        Self::new()
    }
}

impl Command<Spreadsheet> for DoCut {
    type Error = EditError;

    fn label(&self) -> &str {
        Label::CUT
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
        sheet.cut(&range);
        Ok(())
    }
}
