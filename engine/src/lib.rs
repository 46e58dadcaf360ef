//! Spreadsheet edit commands for Tabula.
//!
//! Each command declares its fields, resolves the user's address text against
//! the [`Spreadsheet`] and calls one receiver operation. Every way the sheet can
//! reject an address is reported as the same [`EditError::InvalidCellRange`],
//! so the user-facing vocabulary does not grow with the sheet's validation
//! rules.

mod edit;
mod errors;
mod labels;
mod menu;
mod session;

pub use edit::{DoCopy, DoCut, DoInsert, DoPaste, DoShow, EditCommand};
pub use errors::EditError;
pub use labels::{Label, Message};
pub use menu::{EditAction, MenuChoice, MenuEntry, menu_entries, option_field, render_menu};
pub use session::{SessionStats, run_session};

pub use tabula_sheet::Spreadsheet;
