//! Command lifecycle tests against a receiver that is not a spreadsheet

use std::error::Error;
use std::fmt;
use std::iter;

use tabula_core::{
    Command, Display, Failure, FieldSet, FieldValues, Outcome, RecordingDevice, run,
};

use crate::common::{scripted, texts};

/// A bounded list of notes.
struct Notebook {
    notes: Vec<String>,
    capacity: usize,
}

#[derive(Debug)]
struct NotebookFull(usize);

impl fmt::Display for NotebookFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notebook holds at most {} notes", self.0)
    }
}

impl Error for NotebookFull {}

struct AddNote {
    fields: FieldSet,
}

impl AddNote {
    fn new() -> Self {
        let mut fields = FieldSet::new();
        fields.text("note", "Note").integer("copies", "Copies");
        Self { fields }
    }
}

impl Command<Notebook> for AddNote {
    type Error = NotebookFull;

    fn label(&self) -> &str {
        "Add note"
    }

    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn execute(
        &self,
        notebook: &mut Notebook,
        values: &FieldValues,
        out: &mut Display<'_>,
    ) -> Result<(), Failure<NotebookFull>> {
        let note = values.text("note")?;
        let copies = usize::try_from(values.integer("copies")?)
            .map_err(Failure::<NotebookFull>::unhandled)?;
        if notebook.notes.len().saturating_add(copies) > notebook.capacity {
            return Err(Failure::Command(NotebookFull(notebook.capacity)));
        }
        notebook.notes.extend(iter::repeat_n(note.to_string(), copies));
        out.add_line(format!("Added {copies}"));
        Ok(())
    }
}

fn notebook(capacity: usize) -> Notebook {
    Notebook {
        notes: Vec::new(),
        capacity,
    }
}

#[test]
fn fields_are_collected_in_declaration_order() {
    let mut book = notebook(5);
    let mut device = RecordingDevice::new();
    let mut out = Display::with_title(&mut device, "Add note");

    let outcome = run(&AddNote::new(), &mut book, &mut scripted("milk\n2\n"), &mut out);
    drop(out);

    assert_eq!(outcome.unwrap(), Outcome::Completed);
    assert_eq!(book.notes, ["milk", "milk"]);
    assert_eq!(texts(&device), ["Added 2"]);
}

#[test]
fn domain_error_is_one_message_and_no_partial_output() {
    let mut book = notebook(1);
    let mut device = RecordingDevice::new();
    let mut out = Display::with_title(&mut device, "Add note");
    out.add("stale");

    let outcome = run(&AddNote::new(), &mut book, &mut scripted("milk\n3\n"), &mut out);
    drop(out);

    assert_eq!(
        outcome.unwrap(),
        Outcome::Rejected("Notebook holds at most 1 notes".to_string())
    );
    assert!(book.notes.is_empty());
    assert_eq!(texts(&device), ["Notebook holds at most 1 notes"]);
}

#[test]
fn invalid_field_never_reaches_the_receiver() {
    let mut book = notebook(5);
    let mut device = RecordingDevice::new();
    let mut out = Display::new(&mut device);

    let outcome = run(&AddNote::new(), &mut book, &mut scripted("milk\nmany\n"), &mut out);
    drop(out);

    assert!(matches!(outcome.unwrap(), Outcome::InvalidInput(_)));
    assert!(book.notes.is_empty());
    assert_eq!(
        texts(&device),
        ["'many' is not a whole number (field 'copies')"]
    );
}

#[test]
fn negative_count_escapes_as_unhandled() {
    let mut book = notebook(5);
    let mut device = RecordingDevice::new();
    let mut out = Display::new(&mut device);

    let err = run(&AddNote::new(), &mut book, &mut scripted("milk\n-1\n"), &mut out)
        .unwrap_err();
    drop(out);

    assert_eq!(err.command(), "Add note");
    assert!(device.renders().is_empty());
}
