//! Edit commands against a [`Spreadsheet`].

mod copy;
mod cut;
mod insert;
mod paste;
mod show;

pub use copy::DoCopy;
pub use cut::DoCut;
pub use insert::DoInsert;
pub use paste::DoPaste;
pub use show::DoShow;

use tabula_core::{Command, Failure};
use tabula_sheet::{Range, Spreadsheet};

use crate::errors::EditError;

/// Any edit command, as built by the menu.
pub type EditCommand = dyn Command<Spreadsheet, Error = EditError>;

const ADDRESS: &str = "address";
const CONTENT: &str = "content";

fn resolve(sheet: &Spreadsheet, address: &str) -> Result<Range, Failure<EditError>> {
    sheet
        .create_range(address)
        .map_err(|err| EditError::from_sheet(address, err))
}
