//! Whole-session tests: menu, prompts, commands, plain-text rendering

use tabula_core::WriterDevice;
use tabula_engine::{SessionStats, run_session};
use tabula_sheet::Coord;

use crate::common::{scripted, sheet};

fn transcript(input: &str, rows: usize, columns: usize) -> (SessionStats, String) {
    let mut sheet = sheet(rows, columns, &[]);
    let mut device = WriterDevice::new(Vec::new());
    let stats = run_session(&mut sheet, &mut scripted(input), &mut device, "Edit").unwrap();
    (stats, String::from_utf8(device.into_inner()).unwrap())
}

#[test]
fn insert_then_show_prints_the_cell() {
    let (stats, output) = transcript("2\nB2\nhello\n1\nB2\n0\n", 3, 3);

    assert_eq!(stats.completed, 2);
    assert!(output.contains("Show\nB2|hello\n"));
}

#[test]
fn failed_cut_reports_once_and_the_menu_comes_back() {
    let (stats, output) = transcript("4\nZ99999\n0\n", 3, 3);

    assert_eq!(stats.rejected, 1);
    assert_eq!(output.matches("Invalid cell range: 'Z99999'").count(), 1);
    assert_eq!(output.matches("0 - Exit").count(), 2);
}

#[test]
fn session_state_carries_between_commands() {
    let mut sheet = sheet(4, 4, &[("A1", "a"), ("B1", "b")]);
    let mut device = WriterDevice::new(Vec::new());
    let input = "3\nA1:B1\n5\nA3\n0\n";

    let stats = run_session(&mut sheet, &mut scripted(input), &mut device, "Edit").unwrap();

    assert_eq!(stats.completed, 2);
    assert_eq!(sheet.content(Coord::new(3, 1)), Some("a"));
    assert_eq!(sheet.content(Coord::new(3, 2)), Some("b"));
    assert_eq!(sheet.content(Coord::new(1, 1)), Some("a"));
}
