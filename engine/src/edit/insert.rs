use tabula_core::{Command, Display, Failure, FieldSet, FieldValues};
use tabula_sheet::Spreadsheet;

use super::{ADDRESS, CONTENT, resolve};
use crate::errors::EditError;
use crate::labels::{Label, Message};

/// Insert command. Writes the same text into every cell of a range; empty
/// text clears them.
#[derive(Debug)]
pub struct DoInsert {
    fields: FieldSet,
}

impl DoInsert {
    #[must_use]
    pub fn new() -> Self {
        let mut fields = FieldSet::new();
        fields
            .address(ADDRESS, Message::address())
            .text(CONTENT, Message::content());
        Self { fields }
    }
}

impl Default for DoInsert {
    fn default() -> Self {
        Self::new()
    }
}

impl Command<Spreadsheet> for DoInsert {
    type Error = EditError;

    fn label(&self) -> &str {
        Label::INSERT
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
        let address = values.address(ADDRESS)?;
        let content = values.text(CONTENT)?;
        let range = resolve(sheet, address)?;
        sheet.insert(&range, content);
        Ok(())
    }
}
