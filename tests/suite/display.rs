//! Display buffer tests

use tabula_core::{Display, RecordingDevice, Render};

#[test]
fn result_scenario_flushes_then_renders_empty() {
    let mut device = RecordingDevice::new();
    let mut out = Display::with_title(&mut device, "Result");
    out.add_line("A").add_line("B").add("C");
    out.display();
    out.display();
    drop(out);

    assert_eq!(
        device.renders(),
        [
            Render {
                title: "Result".to_string(),
                text: "A\nBC".to_string(),
            },
            Render {
                title: "Result".to_string(),
                text: String::new(),
            },
        ]
    );
}

#[test]
fn two_displays_share_one_device() {
    let mut device = RecordingDevice::new();
    {
        let mut first = Display::with_title(&mut device, "First");
        first.popup("one");
    }
    {
        let mut second = Display::new(&mut device);
        second.popup("two");
    }

    let titles: Vec<&str> = device.renders().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["First", ""]);
    assert_eq!(device.last().unwrap().text, "two");
}

#[test]
fn popup_all_lists_each_item_on_its_own_line() {
    let mut device = RecordingDevice::new();
    let mut out = Display::new(&mut device);
    out.add("Cells:");
    out.popup_all(Some(["A1", "A2"]));
    out.popup_all(None::<Vec<&str>>);
    drop(out);

    assert_eq!(device.renders().len(), 1);
    assert_eq!(device.last().unwrap().text, "Cells:\nA1\nA2");
}

#[test]
fn display_text_only_renders_pending_output() {
    let mut device = RecordingDevice::new();
    let mut out = Display::new(&mut device);
    out.display_text();
    out.add("done");
    out.display_text();
    out.display_text();
    drop(out);

    assert_eq!(device.renders().len(), 1);
}
