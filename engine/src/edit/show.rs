use tabula_core::{Command, Display, Failure, FieldSet, FieldValues};
use tabula_sheet::Spreadsheet;

use super::{ADDRESS, resolve};
use crate::errors::EditError;
use crate::labels::{Label, Message};

/// Show command. One `A1|content` line per cell.
#[derive(Debug)]
pub struct DoShow {
    fields: FieldSet,
}

impl DoShow {
    #[must_use]
    pub fn new() -> Self {
        let mut fields = FieldSet::new();
        fields.text(ADDRESS, Message::address());
        Self { fields }
    }
}

impl Default for DoShow {
    fn default() -> Self {
        Self::new()
    }
}

impl Command<Spreadsheet> for DoShow {
    type Error = EditError;

    fn label(&self) -> &str {
        Label::SHOW
    }

    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn execute(
        &self,
        sheet: &mut Spreadsheet,
        values: &FieldValues,
        out: &mut Display<'_>,
    ) -> Result<(), Failure<EditError>> {
        let address = values.text(ADDRESS)?;
        let range = resolve(sheet, address)?;
        out.add_all(
            sheet
                .contents(&range)
                .map(|(coord, content)| format!("{coord}|{}", content.unwrap_or_default())),
        );
        out.display();
        Ok(())
    }
}
