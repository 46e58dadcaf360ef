//! A plain-text spreadsheet used as the receiver of Tabula's edit commands.
//!
//! Cells hold literal text; there are no formulas. Cells are addressed in `A1`
//! notation and ranges (`A1:A5`, `B2:F2`) run along a single row or column.

mod coord;
mod sheet;

pub use coord::{Coord, column_name};
pub use sheet::{CutBuffer, Range, SheetError, Spreadsheet};
