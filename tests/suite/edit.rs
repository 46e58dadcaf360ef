//! Edit command tests through the public lifecycle

use tabula_core::{Command, Display, Outcome, RecordingDevice, run};
use tabula_engine::{DoCopy, DoCut, DoInsert, DoPaste, DoShow, EditCommand};
use tabula_sheet::{Coord, Spreadsheet};

use crate::common::{scripted, sheet, texts};

fn run_edit(
    command: &EditCommand,
    sheet: &mut Spreadsheet,
    input: &str,
) -> (Outcome, Vec<String>) {
    let mut device = RecordingDevice::new();
    let mut out = Display::with_title(&mut device, command.label());
    let outcome = run(command, sheet, &mut scripted(input), &mut out).unwrap();
    drop(out);
    let texts = texts(&device).into_iter().map(str::to_string).collect();
    (outcome, texts)
}

#[test]
fn cut_outside_the_sheet_reports_the_input_and_leaves_cells_alone() {
    let mut sheet = sheet(5, 4, &[("A1", "keep")]);
    let (outcome, texts) = run_edit(&DoCut::new(), &mut sheet, "Z99999\n");

    assert_eq!(
        outcome,
        Outcome::Rejected("Invalid cell range: 'Z99999'".to_string())
    );
    assert_eq!(texts, ["Invalid cell range: 'Z99999'"]);
    assert_eq!(sheet.content(Coord::new(1, 1)), Some("keep"));
    assert!(sheet.cut_buffer().is_empty());
}

#[test]
fn unrecognized_and_out_of_bounds_read_the_same() {
    for address in ["Z99999", "not a cell", "A1:B2", "A0"] {
        let mut sheet = sheet(5, 4, &[]);
        let (outcome, _) = run_edit(&DoCut::new(), &mut sheet, &format!("{address}\n"));
        assert_eq!(
            outcome,
            Outcome::Rejected(format!("Invalid cell range: '{address}'")),
            "address {address:?}"
        );
    }
}

#[test]
fn cut_then_paste_moves_a_column() {
    let mut sheet = sheet(5, 4, &[("A1", "x"), ("A2", "y")]);

    let (cut, _) = run_edit(&DoCut::new(), &mut sheet, "a1:a2\n");
    let (paste, _) = run_edit(&DoPaste::new(), &mut sheet, "C3\n");

    assert_eq!(cut, Outcome::Completed);
    assert_eq!(paste, Outcome::Completed);
    assert_eq!(sheet.content(Coord::new(1, 1)), None);
    assert_eq!(sheet.content(Coord::new(3, 3)), Some("x"));
    assert_eq!(sheet.content(Coord::new(4, 3)), Some("y"));
}

#[test]
fn paste_with_nothing_cut_is_rejected() {
    let mut sheet = sheet(5, 4, &[]);
    let (outcome, texts) = run_edit(&DoPaste::new(), &mut sheet, "A1\n");

    assert_eq!(outcome, Outcome::Rejected("The cut buffer is empty".to_string()));
    assert_eq!(texts, ["The cut buffer is empty"]);
}

#[test]
fn copy_keeps_the_source() {
    let mut sheet = sheet(5, 4, &[("B1", "b")]);
    let (outcome, _) = run_edit(&DoCopy::new(), &mut sheet, "B1\n");

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(sheet.content(Coord::new(1, 2)), Some("b"));
    assert_eq!(sheet.cut_buffer().len(), 1);
}

#[test]
fn insert_rejects_malformed_address_before_touching_the_sheet() {
    let mut sheet = sheet(5, 4, &[]);
    let (outcome, texts) = run_edit(&DoInsert::new(), &mut sheet, "1A\nhello\n");

    assert!(matches!(outcome, Outcome::InvalidInput(_)));
    assert_eq!(texts, ["'1A' is not a cell address (field 'address')"]);
    assert!(!sheet.is_dirty());
}

#[test]
fn show_lists_each_cell() {
    let mut sheet = sheet(5, 4, &[("A1", "x"), ("B1", "y")]);
    let (outcome, texts) = run_edit(&DoShow::new(), &mut sheet, "A1:C1\n");

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(texts, ["A1|x\nB1|y\nC1|"]);
}
