//! Config-driven session setup

use std::fs;

use tabula_config::TabulaConfig;
use tabula_core::RecordingDevice;
use tabula_engine::run_session;
use tabula_sheet::Spreadsheet;
use tempfile::tempdir;

use crate::common::scripted;

#[test]
fn configured_title_and_size_reach_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\nmenu_title = \"Sheet\"\n\n[sheet]\nrows = 2\ncolumns = 2\n",
    )
    .unwrap();

    let config = TabulaConfig::load_from(&path).unwrap();
    let (rows, columns) = config.sheet_size();
    let mut sheet = Spreadsheet::new(rows, columns);
    let mut device = RecordingDevice::new();

    let stats = run_session(
        &mut sheet,
        &mut scripted("4\nC3\n0\n"),
        &mut device,
        config.menu_title(),
    )
    .unwrap();

    assert_eq!(stats.rejected, 1);
    assert_eq!(device.renders()[0].title, "Sheet");
    assert!(
        device
            .renders()
            .iter()
            .any(|r| r.text == "Invalid cell range: 'C3'")
    );
}

#[test]
fn bad_config_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nmenu_colour = \"red\"\n").unwrap();

    let err = TabulaConfig::load_from(&path).unwrap_err();
    assert_eq!(err.path(), path.as_path());
}
