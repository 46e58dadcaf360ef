//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::{self, Cursor};

use tabula_core::{LinePrompter, RecordingDevice};
use tabula_sheet::Spreadsheet;

/// A prompter that answers from `input`, one line per field, and discards the
/// prompt text.
pub fn scripted(input: &str) -> LinePrompter<Cursor<String>, io::Sink> {
    LinePrompter::new(Cursor::new(input.to_string()), io::sink())
}

/// A sheet with the given cells filled in.
pub fn sheet(rows: usize, columns: usize, cells: &[(&str, &str)]) -> Spreadsheet {
    let mut sheet = Spreadsheet::new(rows, columns);
    for (address, content) in cells {
        let range = sheet.create_range(address).unwrap();
        sheet.insert(&range, content);
    }
    sheet
}

/// Texts of every render, in order.
pub fn texts(device: &RecordingDevice) -> Vec<&str> {
    device.renders().iter().map(|r| r.text.as_str()).collect()
}
